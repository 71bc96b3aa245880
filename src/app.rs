//! Frame orchestrator
//!
//! One loop, one mutator: pace the clock, poll input, advance the match
//! state machine, run physics while Playing, decay effects, compose the
//! frame, present with the shake offset. The simulation step consumes the
//! measured frame dt rather than a fixed accumulator, so physics is
//! variable-timestep by design (typically near-uniform at 60 fps).

use glam::IVec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS};
use crate::fx::Effects;
use crate::platform::{Clock, InputSource};
use crate::render::{self, Surface};
use crate::settings::Settings;
use crate::sim::{self, GameState, MatchPhase};

pub struct App<C, I, S> {
    pub state: GameState,
    pub fx: Effects,
    pub settings: Settings,
    pub clock: C,
    pub input: I,
    pub surface: S,
}

impl<C: Clock, I: InputSource, S: Surface> App<C, I, S> {
    pub fn new(seed: u64, settings: Settings, clock: C, input: I, surface: S) -> Self {
        Self {
            state: GameState::new(seed),
            fx: Effects::new(),
            settings,
            clock,
            input,
            surface,
        }
    }

    /// Run until the input source signals quit; returns the frame count
    pub fn run(&mut self) -> u64 {
        log::info!(
            "frame loop starting ({}x{} @ {} fps)",
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
            TARGET_FPS
        );

        let mut frames: u64 = 0;
        loop {
            let dt_ms = self.clock.pace(TARGET_FPS);
            let dt = dt_ms as f32 / 1000.0;

            let frame = self.input.poll();
            if frame.quit {
                break;
            }

            let now_ms = self.clock.now_ms();
            self.state.match_state.advance(now_ms, frame.pressed);

            if self.state.match_state.phase == MatchPhase::Playing {
                sim::step(&mut self.state, &mut self.fx, &frame.held, now_ms);
            }

            self.fx.update(dt, dt_ms);

            render::compose(&mut self.surface, &self.state, &self.fx, &self.settings, now_ms);
            let offset = if self.settings.effective_screen_shake() {
                self.fx.shake_offset(&mut self.state.rng)
            } else {
                IVec2::ZERO
            };
            self.surface.present(offset);
            frames += 1;
        }

        log::info!(
            "quit after {} frames, final score {} - {}",
            frames,
            self.state.score.left,
            self.state.score.right
        );
        frames
    }
}
