//! Ephemeral visual effects
//!
//! Everything here is presentation-only state: particles, the ball trail,
//! screen shake and the white impact flash. None of it feeds back into
//! physics. Collisions and scores arrive as bundled `Impact` triggers.

use std::collections::VecDeque;

use glam::{IVec2, Vec2};

use crate::consts::{FLASH_DECAY_PER_SEC, TRAIL_LENGTH};
use crate::render::{Color, NEON_BLUE, NEON_GREEN, NEON_PINK};
use crate::sim::{GameRng, Side};

/// Downward velocity bias applied to every particle each tick
const PARTICLE_GRAVITY: f32 = 0.05;

/// An independently-aging spark
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime in seconds; dead at <= 0
    pub life: f32,
    pub color: Color,
}

impl Particle {
    fn spawn(rng: &mut GameRng, origin: IVec2, color: Color) -> Self {
        Self {
            pos: origin.as_vec2(),
            vel: rng.burst_velocity(),
            life: rng.particle_life(),
            color,
        }
    }

    /// Age by `dt` seconds; motion and gravity advance per tick
    fn update(&mut self, dt: f32) {
        self.life -= dt;
        self.pos += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
    }
}

/// A bundled side-effect trigger fired by the physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    /// Ball bounced off the top or bottom wall
    Wall { at: IVec2 },
    /// Ball struck a paddle
    Paddle { side: Side, at: IVec2 },
    /// Ball left the court; strongest kick, no particles
    Score,
}

impl Impact {
    /// (flash alpha, shake timer ms, shake magnitude)
    fn kick(&self) -> (f32, f32, i32) {
        match self {
            Impact::Wall { .. } => (140.0, 150.0, 6),
            Impact::Paddle { .. } => (160.0, 180.0, 8),
            Impact::Score => (180.0, 220.0, 10),
        }
    }

    /// Particle burst for this impact, if any: (origin, color, count)
    fn burst(&self) -> Option<(IVec2, Color, usize)> {
        match *self {
            Impact::Wall { at } => Some((at, NEON_BLUE, 10)),
            Impact::Paddle { side: Side::Left, at } => Some((at, NEON_GREEN, 14)),
            Impact::Paddle { side: Side::Right, at } => Some((at, NEON_PINK, 14)),
            Impact::Score => None,
        }
    }
}

/// Owner of all ephemeral effect state
#[derive(Debug, Clone, Default)]
pub struct Effects {
    pub particles: Vec<Particle>,
    /// Historical ball centers, oldest first
    pub trail: VecDeque<IVec2>,
    /// White overlay alpha, 0..=250
    pub flash_alpha: f32,
    shake_timer_ms: f32,
    shake_mag: i32,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a bundled impact: particle burst plus flash and shake kicks
    pub fn trigger(&mut self, rng: &mut GameRng, impact: Impact) {
        let (flash, shake_ms, mag) = impact.kick();
        self.flash_alpha = flash;
        self.shake_timer_ms = shake_ms;
        self.shake_mag = mag;
        if let Some((origin, color, count)) = impact.burst() {
            self.spawn_burst(rng, origin, color, count);
        }
    }

    /// Spawn `count` particles radiating from `origin`
    pub fn spawn_burst(&mut self, rng: &mut GameRng, origin: IVec2, color: Color, count: usize) {
        self.particles
            .extend(std::iter::repeat_with(|| Particle::spawn(rng, origin, color)).take(count));
    }

    /// Record a ball center; oldest entry drops past the cap
    pub fn push_trail(&mut self, center: IVec2) {
        self.trail.push_back(center);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }
    }

    /// Advance and decay everything by one frame
    pub fn update(&mut self, dt: f32, dt_ms: u32) {
        for p in &mut self.particles {
            p.update(dt);
        }
        self.particles.retain(|p| p.life > 0.0);

        self.flash_alpha = (self.flash_alpha - FLASH_DECAY_PER_SEC * dt).max(0.0);
        self.shake_timer_ms = (self.shake_timer_ms - dt_ms as f32).max(0.0);
    }

    /// Whole-scene translation for this frame; resampled every call while
    /// the shake timer runs, zero once it expires
    pub fn shake_offset(&mut self, rng: &mut GameRng) -> IVec2 {
        if self.shake_timer_ms > 0.0 {
            rng.shake_offset(self.shake_mag)
        } else {
            IVec2::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_caps_at_fourteen_fifo() {
        let mut fx = Effects::new();
        for i in 0..20 {
            fx.push_trail(IVec2::new(i, 0));
        }
        assert_eq!(fx.trail.len(), TRAIL_LENGTH);
        assert_eq!(fx.trail.front(), Some(&IVec2::new(6, 0)), "oldest evicted");
        assert_eq!(fx.trail.back(), Some(&IVec2::new(19, 0)));
    }

    #[test]
    fn particle_dies_when_life_reaches_zero() {
        let mut fx = Effects::new();
        fx.particles.push(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, 0.0),
            life: 0.5,
            color: NEON_BLUE,
        });
        fx.update(0.25, 250);
        assert_eq!(fx.particles.len(), 1);
        assert!((fx.particles[0].life - 0.25).abs() < 1e-6);
        fx.update(0.25, 250);
        assert!(fx.particles.is_empty(), "purged the tick life hits zero");
    }

    #[test]
    fn particle_motion_is_per_tick_with_gravity() {
        let mut fx = Effects::new();
        fx.particles.push(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(2.0, -1.0),
            life: 1.0,
            color: NEON_BLUE,
        });
        fx.update(0.016, 16);
        let p = &fx.particles[0];
        assert_eq!(p.pos, Vec2::new(2.0, -1.0));
        assert!((p.vel.y - (-1.0 + PARTICLE_GRAVITY)).abs() < 1e-6);
    }

    #[test]
    fn burst_counts_and_lifetimes() {
        let mut fx = Effects::new();
        let mut rng = GameRng::new(1);
        fx.trigger(&mut rng, Impact::Wall { at: IVec2::new(100, 0) });
        assert_eq!(fx.particles.len(), 10);
        for p in &fx.particles {
            assert!((0.3..0.9).contains(&p.life));
            let speed = p.vel.length();
            assert!(speed > 1.99 && speed < 6.01);
        }
    }

    #[test]
    fn flash_decays_linearly_and_floors_at_zero() {
        let mut fx = Effects::new();
        let mut rng = GameRng::new(1);
        fx.trigger(&mut rng, Impact::Score);
        fx.flash_alpha = 250.0;
        fx.update(0.1, 100);
        assert!((fx.flash_alpha - 210.0).abs() < 1e-4);
        // 0.625s total from 250 at 400/s
        fx.update(0.6, 600);
        assert_eq!(fx.flash_alpha, 0.0);
        fx.update(0.1, 100);
        assert_eq!(fx.flash_alpha, 0.0, "never negative");
    }

    #[test]
    fn shake_offset_gated_by_timer_not_magnitude() {
        let mut fx = Effects::new();
        let mut rng = GameRng::new(5);
        fx.trigger(&mut rng, Impact::Score);
        let off = fx.shake_offset(&mut rng);
        assert!(off.x.abs() <= 10 && off.y.abs() <= 10);
        // Timer expires, magnitude untouched
        fx.update(0.25, 250);
        assert_eq!(fx.shake_offset(&mut rng), IVec2::ZERO);
        assert_eq!(fx.shake_mag, 10);
    }
}
