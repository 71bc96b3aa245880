//! Simulation context and core entity types
//!
//! All mutable match state lives in `GameState`; subsystems receive it by
//! reference instead of reaching for globals. The RNG is part of the
//! context so a seeded state replays identically.

use glam::{IVec2, Vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::phase::MatchState;
use super::rect::Rect;
use crate::consts::*;

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub rect: Rect,
    pub side: Side,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => SCREEN_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        Self {
            rect: Rect::new(
                x,
                SCREEN_HEIGHT / 2 - PADDLE_HEIGHT / 2,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            side,
        }
    }

    /// Move by `dy` and clamp fully inside the vertical screen bounds
    pub fn slide(&mut self, dy: i32) {
        self.rect.y = crate::clamp_i32(self.rect.y + dy, 0, SCREEN_HEIGHT - PADDLE_HEIGHT);
    }
}

/// The ball: integer rect position, float velocity
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Ball {
    /// Centered ball with a fresh serve velocity
    pub fn serve(rng: &mut GameRng) -> Self {
        let mut ball = Self {
            rect: Rect::new(0, 0, BALL_SIZE, BALL_SIZE),
            vel: Vec2::ZERO,
        };
        ball.reset(rng);
        ball
    }

    /// Recenter and re-roll velocity (initial spawn and every score)
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.rect
            .set_center(IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2));
        self.vel = rng.serve_velocity();
    }
}

/// Per-side score counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// The single seeded random source for the whole game
///
/// Every random draw (serves, particle bursts, shake offsets) goes through
/// here, so a fixed seed replays a match bit-for-bit.
#[derive(Debug, Clone)]
pub struct GameRng(Pcg32);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }

    /// Serve velocity: per-axis magnitude uniform in [min, max], each sign
    /// flipped independently. Any of the four diagonals can come up.
    pub fn serve_velocity(&mut self) -> Vec2 {
        let mut vx = self.0.random_range(BALL_MIN_SPEED..BALL_MAX_SPEED);
        let mut vy = self.0.random_range(BALL_MIN_SPEED..BALL_MAX_SPEED);
        if self.0.random_bool(0.5) {
            vx = -vx;
        }
        if self.0.random_bool(0.5) {
            vy = -vy;
        }
        Vec2::new(vx, vy)
    }

    /// Burst particle velocity: uniform direction, speed in [2, 6)
    pub fn burst_velocity(&mut self) -> Vec2 {
        let angle = self.0.random_range(0.0..std::f32::consts::TAU);
        let speed = self.0.random_range(2.0..6.0);
        Vec2::new(speed * angle.cos(), speed * angle.sin())
    }

    /// Particle lifetime in seconds
    pub fn particle_life(&mut self) -> f32 {
        self.0.random_range(0.3..0.9)
    }

    /// Per-frame shake translation, each axis in [-mag, +mag]
    pub fn shake_offset(&mut self, mag: i32) -> IVec2 {
        IVec2::new(
            self.0.random_range(-mag..=mag),
            self.0.random_range(-mag..=mag),
        )
    }
}

/// Complete simulation context (no hidden globals)
#[derive(Debug, Clone)]
pub struct GameState {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub match_state: MatchState,
    pub rng: GameRng,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        Self {
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::serve(&mut rng),
            score: Score::default(),
            match_state: MatchState::default(),
            rng,
        }
    }
}
