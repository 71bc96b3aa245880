//! Headless doubles for the platform traits
//!
//! Used by the integration tests and the demo binary: a hand-cranked
//! clock, a scripted input source and a surface that records draw calls
//! instead of rasterizing them.

use std::collections::VecDeque;

use glam::IVec2;

use crate::platform::{Clock, InputFrame, InputSource};
use crate::render::{Color, Surface, TextStyle};
use crate::sim::Rect;

/// Clock that advances a fixed amount per `pace` call
#[derive(Debug, Clone)]
pub struct ManualClock {
    now_ms: u64,
    frame_ms: u32,
}

impl ManualClock {
    pub fn new(frame_ms: u32) -> Self {
        Self { now_ms: 0, frame_ms }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn pace(&mut self, _target_fps: u32) -> u32 {
        self.now_ms += self.frame_ms as u64;
        self.frame_ms
    }
}

/// Input source that replays a fixed frame script, then quits
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputFrame {
        self.frames.pop_front().unwrap_or(InputFrame {
            quit: true,
            ..Default::default()
        })
    }
}

/// One recorded draw primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Clear(Color),
    Rect {
        rect: Rect,
        color: Color,
        alpha: u8,
        corner_radius: i32,
    },
    Ellipse {
        rect: Rect,
        color: Color,
        alpha: u8,
    },
    Circle {
        center: IVec2,
        radius: i32,
        color: Color,
        alpha: u8,
    },
    Text {
        text: String,
        style: TextStyle,
        color: Color,
        center: IVec2,
    },
    Overlay {
        color: Color,
        alpha: u8,
    },
}

/// Surface that records every call of the current frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// Calls since the last present
    pub calls: Vec<DrawCall>,
    /// Shake offset of each presented frame
    pub presented: Vec<IVec2>,
}

impl RecordingSurface {
    pub fn has_text(&self, wanted: &str) -> bool {
        self.calls
            .iter()
            .any(|c| matches!(c, DrawCall::Text { text, .. } if text == wanted))
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, alpha: u8, corner_radius: i32) {
        self.calls.push(DrawCall::Rect {
            rect,
            color,
            alpha,
            corner_radius,
        });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color, alpha: u8) {
        self.calls.push(DrawCall::Ellipse { rect, color, alpha });
    }

    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Color, alpha: u8) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn blit_text(&mut self, text: &str, style: TextStyle, color: Color, center: IVec2) {
        self.calls.push(DrawCall::Text {
            text: text.to_owned(),
            style,
            color,
            center,
        });
    }

    fn fill_overlay(&mut self, color: Color, alpha: u8) {
        self.calls.push(DrawCall::Overlay { color, alpha });
    }

    fn present(&mut self, offset: IVec2) {
        self.presented.push(offset);
        self.calls.clear();
    }
}
