//! Platform abstraction layer
//!
//! The core never talks to a window system directly. A backend supplies
//! per-frame input snapshots and wall-clock pacing through these traits;
//! `headless` provides scripted doubles for tests and the demo binary.

/// Movement keys held down this frame
///
/// Left paddle: W/S. Right paddle: Up/Down. (Binding the physical keys is
/// the backend's job; the core only sees directions.)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Held {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

/// Everything the loop needs to know about input for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    pub held: Held,
    /// Any key or mouse button went down this frame (menu dismissal edge)
    pub pressed: bool,
    /// Close event or Escape; ends the loop after this frame
    pub quit: bool,
}

/// Per-frame input source
pub trait InputSource {
    fn poll(&mut self) -> InputFrame;
}

/// Monotonic time and frame pacing
pub trait Clock {
    /// Monotonic wall-clock milliseconds
    fn now_ms(&self) -> u64;

    /// Sleep out the remainder of the frame budget for `target_fps`, then
    /// return the measured duration of the frame that just ended, in ms.
    /// The simulation consumes this measured dt - the step is variable.
    fn pace(&mut self, target_fps: u32) -> u32;
}
