//! Per-tick gameplay physics
//!
//! Runs only while the match phase is `Playing`. Order matters and is
//! load-bearing: paddles, ball integration, trail snapshot, walls,
//! paddles, scoring. Ball integration truncates each velocity component
//! to an integer, which quantizes speed slightly; that is intentional and
//! reproducible, not drift to be fixed.

use glam::IVec2;

use super::state::{GameState, Side};
use crate::consts::*;
use crate::fx::{Effects, Impact};
use crate::platform::Held;

/// Advance gameplay by one tick
pub fn step(state: &mut GameState, fx: &mut Effects, held: &Held, now_ms: u64) {
    // Paddle movement: net delta first, one clamp after
    let mut dy = 0;
    if held.left_up {
        dy -= PADDLE_SPEED;
    }
    if held.left_down {
        dy += PADDLE_SPEED;
    }
    state.left.slide(dy);

    let mut dy = 0;
    if held.right_up {
        dy -= PADDLE_SPEED;
    }
    if held.right_down {
        dy += PADDLE_SPEED;
    }
    state.right.slide(dy);

    // Integrate ball; truncation toward zero is deliberate
    state.ball.rect.x += state.ball.vel.x as i32;
    state.ball.rect.y += state.ball.vel.y as i32;

    // Trail records the pre-clamp center
    fx.push_trail(state.ball.rect.center());

    // Top/bottom walls
    if state.ball.rect.top() <= 0 {
        state.ball.rect.set_top(0);
        state.ball.vel.y = -state.ball.vel.y;
        let at = IVec2::new(state.ball.rect.center().x, 0);
        fx.trigger(&mut state.rng, Impact::Wall { at });
    } else if state.ball.rect.bottom() >= SCREEN_HEIGHT {
        state.ball.rect.set_bottom(SCREEN_HEIGHT);
        state.ball.vel.y = -state.ball.vel.y;
        let at = IVec2::new(state.ball.rect.center().x, SCREEN_HEIGHT);
        fx.trigger(&mut state.rng, Impact::Wall { at });
    }

    // Paddle hits. Both checks run every tick, each gated only on travel
    // direction and overlap; a geometrically simultaneous hit fires both.
    if state.ball.rect.intersects(&state.left.rect) && state.ball.vel.x < 0.0 {
        state.ball.rect.set_left(state.left.rect.right());
        deflect(state, Side::Left);
        let at = IVec2::new(state.ball.rect.left(), state.ball.rect.center().y);
        fx.trigger(&mut state.rng, Impact::Paddle { side: Side::Left, at });
    }

    if state.ball.rect.intersects(&state.right.rect) && state.ball.vel.x > 0.0 {
        state.ball.rect.set_right(state.right.rect.left());
        deflect(state, Side::Right);
        let at = IVec2::new(state.ball.rect.right(), state.ball.rect.center().y);
        fx.trigger(&mut state.rng, Impact::Paddle { side: Side::Right, at });
    }

    // Scoring
    if state.ball.rect.left() <= 0 {
        score(state, fx, Side::Right, now_ms);
    } else if state.ball.rect.right() >= SCREEN_WIDTH {
        score(state, fx, Side::Left, now_ms);
    }
}

/// Invert vx, apply spin proportional to the strike offset, then grow the
/// horizontal speed by the fixed boost in the new travel direction
fn deflect(state: &mut GameState, side: Side) {
    let paddle = match side {
        Side::Left => &state.left,
        Side::Right => &state.right,
    };
    state.ball.vel.x = -state.ball.vel.x;
    let offset = (state.ball.rect.center().y - paddle.rect.center().y) as f32
        / (PADDLE_HEIGHT as f32 / 2.0);
    state.ball.vel.y += offset;
    state.ball.vel.x += if state.ball.vel.x > 0.0 {
        BALL_HIT_BOOST
    } else {
        -BALL_HIT_BOOST
    };
}

fn score(state: &mut GameState, fx: &mut Effects, winner: Side, now_ms: u64) {
    state.score.award(winner);
    log::info!(
        "{:?} scores ({} - {})",
        winner,
        state.score.left,
        state.score.right
    );
    state.ball.reset(&mut state.rng);
    state.match_state.begin_countdown(now_ms);
    fx.trigger(&mut state.rng, Impact::Score);
}
