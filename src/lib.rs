//! Neon Pong - a two-player neon arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match phases)
//! - `fx`: Ephemeral visual effects (particles, trail, shake, flash)
//! - `render`: Back-to-front draw composition against an abstract surface
//! - `platform`: Clock and input abstraction
//! - `app`: Frame orchestrator owning the 60 Hz loop
//! - `headless`: Test doubles for the platform traits

pub mod app;
pub mod fx;
pub mod headless;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use app::App;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (logical pixels)
    pub const SCREEN_WIDTH: i32 = 960;
    pub const SCREEN_HEIGHT: i32 = 720;

    /// Paddle geometry and movement
    pub const PADDLE_WIDTH: i32 = 12;
    pub const PADDLE_HEIGHT: i32 = 120;
    /// Gap between a paddle and its screen edge
    pub const PADDLE_MARGIN: i32 = 30;
    /// Pixels moved per tick per held key
    pub const PADDLE_SPEED: i32 = 7;

    /// Ball geometry and speed envelope
    pub const BALL_SIZE: i32 = 14;
    /// Per-axis serve speed bounds (see `GameRng::serve_velocity`)
    pub const BALL_MIN_SPEED: f32 = 3.0;
    pub const BALL_MAX_SPEED: f32 = 5.0;
    /// Added to |vx| on every paddle hit - speed only ever grows
    pub const BALL_HIT_BOOST: f32 = 0.3;

    /// Target frame rate for the orchestrator loop
    pub const TARGET_FPS: u32 = 60;

    /// Ball trail ring-buffer capacity
    pub const TRAIL_LENGTH: usize = 14;

    /// Flash overlay decay rate (alpha units per second)
    pub const FLASH_DECAY_PER_SEC: f32 = 400.0;

    /// Countdown duration before play starts (seconds)
    pub const COUNTDOWN_SECS: f32 = 3.0;
}

/// Clamp an integer into [min, max]
#[inline]
pub fn clamp_i32(val: i32, min: i32, max: i32) -> i32 {
    val.max(min).min(max)
}
