//! Back-to-front draw composition
//!
//! The core emits abstract draw primitives; rasterization, fonts and the
//! actual compositing live behind the `Surface` trait. Composition order
//! is fixed: background and center line, paddles, trail, ball, particles,
//! score, phase HUD, flash overlay, then present with the shake offset.

use glam::IVec2;

use crate::consts::*;
use crate::fx::Effects;
use crate::settings::Settings;
use crate::sim::{GameState, MatchPhase, Rect};

/// An opaque RGB color; alpha travels separately per draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Color = Color::new(6, 8, 12);
pub const WHITE: Color = Color::new(245, 245, 245);
pub const GREY: Color = Color::new(160, 160, 160);
pub const NEON_BLUE: Color = Color::new(55, 200, 255);
pub const NEON_PINK: Color = Color::new(255, 80, 190);
pub const NEON_GREEN: Color = Color::new(80, 255, 160);

/// Size class for blitted text; the backend picks the actual font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Large bold face (title, score, countdown digit)
    Title,
    /// Small face (prompts, key hints)
    Hud,
}

/// Abstract draw target
///
/// Backends composite every call of a frame onto an off-screen scene and
/// apply the `present` offset as a whole-scene translation (screen shake).
pub trait Surface {
    fn clear(&mut self, color: Color);
    /// Filled rectangle; `corner_radius` > 0 rounds the corners
    fn fill_rect(&mut self, rect: Rect, color: Color, alpha: u8, corner_radius: i32);
    fn fill_ellipse(&mut self, rect: Rect, color: Color, alpha: u8);
    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Color, alpha: u8);
    /// Blit pre-rendered text centered on `center`. A backend that cannot
    /// load its preferred font must fall back to a default face rather
    /// than fail startup.
    fn blit_text(&mut self, text: &str, style: TextStyle, color: Color, center: IVec2);
    /// Full-screen translucent overlay on top of the scene so far
    fn fill_overlay(&mut self, color: Color, alpha: u8);
    /// Composite the finished scene translated by `offset` and flip
    fn present(&mut self, offset: IVec2);
}

const GLOW_LAYERS: i32 = 10;
const CORNER_RADIUS: i32 = 6;
const CENTER_DASH_H: i32 = 20;
const CENTER_DASH_GAP: i32 = 15;

/// Alpha/diameter ramp for trail dot `i` of `len` (oldest = faintest)
pub fn trail_dot(i: usize, len: usize) -> (u8, i32) {
    let age = i as f32 / len.max(1) as f32;
    let alpha = (180.0 * age) as u8;
    let diameter = ((BALL_SIZE as f32 * age) as i32).max(4);
    (alpha, diameter)
}

fn center_line<S: Surface + ?Sized>(surface: &mut S) {
    let mut y = 0;
    while y < SCREEN_HEIGHT {
        let dash = Rect::new(SCREEN_WIDTH / 2 - 2, y, 4, CENTER_DASH_H);
        surface.fill_rect(dash, GREY, 255, 0);
        y += CENTER_DASH_H + CENTER_DASH_GAP;
    }
}

fn neon_rect<S: Surface + ?Sized>(surface: &mut S, rect: Rect, color: Color) {
    for i in (1..=GLOW_LAYERS).rev() {
        surface.fill_rect(rect.inflate(i * 3, i * 3), color, (10 * i) as u8, CORNER_RADIUS);
    }
    surface.fill_rect(rect, color, 255, CORNER_RADIUS);
}

fn neon_ellipse<S: Surface + ?Sized>(surface: &mut S, rect: Rect, color: Color) {
    for i in (1..=GLOW_LAYERS).rev() {
        surface.fill_ellipse(rect.inflate(i * 3, i * 3), color, (12 * i) as u8);
    }
    surface.fill_ellipse(rect, color, 255);
}

/// Compose one frame, back to front
pub fn compose<S: Surface + ?Sized>(
    surface: &mut S,
    state: &GameState,
    fx: &Effects,
    settings: &Settings,
    now_ms: u64,
) {
    surface.clear(BLACK);
    center_line(surface);

    neon_rect(surface, state.left.rect, NEON_GREEN);
    neon_rect(surface, state.right.rect, NEON_PINK);

    if settings.trails {
        let len = fx.trail.len();
        for (i, center) in fx.trail.iter().enumerate() {
            let (alpha, diameter) = trail_dot(i, len);
            surface.fill_circle(*center, diameter / 2, NEON_BLUE, alpha);
        }
    }

    neon_ellipse(surface, state.ball.rect, NEON_BLUE);

    if settings.particles {
        for p in &fx.particles {
            let alpha = (255.0 * p.life.clamp(0.0, 1.0)) as u8;
            surface.fill_circle(p.pos.as_ivec2(), 4, p.color, alpha);
        }
    }

    let score = format!("{}   {}", state.score.left, state.score.right);
    surface.blit_text(&score, TextStyle::Title, WHITE, IVec2::new(SCREEN_WIDTH / 2, 50));

    let mid = IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2);
    match state.match_state.phase {
        MatchPhase::Menu => {
            surface.blit_text("P O N G", TextStyle::Title, WHITE, mid - IVec2::new(0, 60));
            surface.blit_text(
                "Press any key to start",
                TextStyle::Hud,
                GREY,
                mid + IVec2::new(0, 20),
            );
        }
        MatchPhase::Countdown => {
            let digit = state.match_state.countdown_digit(now_ms).to_string();
            surface.blit_text(&digit, TextStyle::Title, WHITE, mid);
        }
        MatchPhase::Playing => {
            surface.blit_text(
                "Left: W/S  |  Right: Up/Down  |  Esc: Quit",
                TextStyle::Hud,
                GREY,
                IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT - 30),
            );
        }
    }

    if settings.effective_flash() && fx.flash_alpha > 0.0 {
        surface.fill_overlay(WHITE, fx.flash_alpha as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{DrawCall, RecordingSurface};
    use crate::sim::GameState;

    fn composed(state: &GameState, fx: &Effects) -> RecordingSurface {
        let mut surface = RecordingSurface::default();
        compose(&mut surface, state, fx, &Settings::default(), 0);
        surface
    }

    #[test]
    fn frame_starts_with_clear_then_center_line() {
        let state = GameState::new(1);
        let surface = composed(&state, &Effects::new());
        assert!(matches!(surface.calls[0], DrawCall::Clear(BLACK)));
        // 720px of 20px dashes with 15px gaps
        let dashes = surface
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Rect { color, .. } if *color == GREY))
            .count();
        assert_eq!(dashes, 21);
    }

    #[test]
    fn menu_frame_shows_title_and_prompt() {
        let state = GameState::new(1);
        let surface = composed(&state, &Effects::new());
        assert!(surface.has_text("P O N G"));
        assert!(surface.has_text("Press any key to start"));
    }

    #[test]
    fn countdown_frame_shows_digit_three() {
        let mut state = GameState::new(1);
        state.match_state.begin_countdown(0);
        let surface = composed(&state, &Effects::new());
        assert!(surface.has_text("3"));
    }

    #[test]
    fn flash_overlay_only_when_lit() {
        let state = GameState::new(1);
        let surface = composed(&state, &Effects::new());
        assert!(!surface.calls.iter().any(|c| matches!(c, DrawCall::Overlay { .. })));

        let mut fx = Effects::new();
        fx.flash_alpha = 180.0;
        let surface = composed(&state, &fx);
        assert!(
            surface
                .calls
                .iter()
                .any(|c| matches!(c, DrawCall::Overlay { alpha: 180, .. }))
        );
    }

    #[test]
    fn trail_ramp_fades_toward_oldest() {
        let (a0, d0) = trail_dot(0, 14);
        let (a13, d13) = trail_dot(13, 14);
        assert_eq!((a0, d0), (0, 4), "oldest dot is faint and minimum size");
        assert!(a13 > a0 && d13 > d0);
        assert!(d13 <= BALL_SIZE);
    }

    #[test]
    fn glow_layers_fade_outward() {
        let state = GameState::new(1);
        let surface = composed(&state, &Effects::new());
        // First paddle glow layer drawn is the widest, faintest one
        let first_green = surface.calls.iter().find_map(|c| match c {
            DrawCall::Rect { color, alpha, rect, .. } if *color == NEON_GREEN => {
                Some((*alpha, *rect))
            }
            _ => None,
        });
        let (alpha, rect) = first_green.expect("paddle glow present");
        assert_eq!(alpha, 100);
        assert_eq!(rect.w, state.left.rect.w + 30);
    }
}
