//! Neon Pong entry point
//!
//! A windowed build wires real `Clock`/`InputSource`/`Surface` backends
//! into `App`. This binary runs the headless demo path: a scripted match
//! against the recording surface, useful as a smoke run and for profiling
//! the simulation without a display.

use neon_pong::headless::{ManualClock, RecordingSurface, ScriptedInput};
use neon_pong::platform::{Held, InputFrame};
use neon_pong::{App, Settings};

fn main() {
    env_logger::init();
    log::info!("Neon Pong (headless demo) starting");

    // Press a key to leave the menu, ride out the countdown, then hold
    // both paddles toward the top for a few seconds of play.
    let mut frames = vec![InputFrame {
        pressed: true,
        ..Default::default()
    }];
    frames.extend(vec![InputFrame::default(); 190]);
    frames.extend(vec![
        InputFrame {
            held: Held {
                left_up: true,
                right_up: true,
                ..Default::default()
            },
            ..Default::default()
        };
        600
    ]);

    let mut app = App::new(
        0xDECADE,
        Settings::load(),
        ManualClock::new(16),
        ScriptedInput::new(frames),
        RecordingSurface::default(),
    );
    let frames = app.run();

    println!(
        "demo: {} frames, score {} - {}, {} live particles at quit",
        frames,
        app.state.score.left,
        app.state.score.right,
        app.fx.particles.len()
    );
}
