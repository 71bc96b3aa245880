//! Match state machine
//!
//! Menu -> Countdown -> Playing, with every score dropping back to
//! Countdown. Transitions are gated on wall-clock time, not frame counts,
//! so a stalled frame cannot stretch the countdown.

use crate::consts::COUNTDOWN_SECS;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Title screen, waiting for any key/click
    Menu,
    /// 3-2-1 countdown before the ball is live
    Countdown,
    /// Active gameplay
    Playing,
}

/// Phase plus the countdown's start timestamp
#[derive(Debug, Clone, Copy)]
pub struct MatchState {
    pub phase: MatchPhase,
    countdown_started_at_ms: u64,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            phase: MatchPhase::Menu,
            countdown_started_at_ms: 0,
        }
    }
}

impl MatchState {
    /// Advance the machine one frame. `pressed` is the "any key or click
    /// went down this frame" edge used to leave the menu.
    pub fn advance(&mut self, now_ms: u64, pressed: bool) {
        match self.phase {
            MatchPhase::Menu => {
                if pressed {
                    self.begin_countdown(now_ms);
                    log::info!("match starting");
                }
            }
            MatchPhase::Countdown => {
                if self.countdown_elapsed_secs(now_ms) >= COUNTDOWN_SECS {
                    self.phase = MatchPhase::Playing;
                }
            }
            MatchPhase::Playing => {}
        }
    }

    /// Enter Countdown and restart its timer (menu exit and every score)
    pub fn begin_countdown(&mut self, now_ms: u64) {
        self.phase = MatchPhase::Countdown;
        self.countdown_started_at_ms = now_ms;
    }

    fn countdown_elapsed_secs(&self, now_ms: u64) -> f32 {
        now_ms.saturating_sub(self.countdown_started_at_ms) as f32 / 1000.0
    }

    /// Digit to display while counting down; clamped so 0 is never shown
    pub fn countdown_digit(&self, now_ms: u64) -> u32 {
        let remaining = COUNTDOWN_SECS as i64 - self.countdown_elapsed_secs(now_ms) as i64;
        remaining.max(1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_waits_for_press() {
        let mut m = MatchState::default();
        m.advance(100, false);
        assert_eq!(m.phase, MatchPhase::Menu);
        m.advance(200, true);
        assert_eq!(m.phase, MatchPhase::Countdown);
    }

    #[test]
    fn countdown_gate_is_three_seconds() {
        let mut m = MatchState::default();
        m.advance(1_000, true);
        m.advance(3_999, false);
        assert_eq!(m.phase, MatchPhase::Countdown, "2.999s is not enough");
        m.advance(4_000, false);
        assert_eq!(m.phase, MatchPhase::Playing);
    }

    #[test]
    fn digits_run_three_to_one_never_zero() {
        let mut m = MatchState::default();
        m.advance(0, true);
        assert_eq!(m.countdown_digit(0), 3);
        assert_eq!(m.countdown_digit(999), 3);
        assert_eq!(m.countdown_digit(1_000), 2);
        assert_eq!(m.countdown_digit(2_000), 1);
        assert_eq!(m.countdown_digit(2_999), 1, "never displays 0");
    }

    #[test]
    fn score_restarts_countdown() {
        let mut m = MatchState::default();
        m.advance(0, true);
        m.advance(3_000, false);
        assert_eq!(m.phase, MatchPhase::Playing);
        m.begin_countdown(10_000);
        assert_eq!(m.phase, MatchPhase::Countdown);
        m.advance(12_900, false);
        assert_eq!(m.phase, MatchPhase::Countdown);
        m.advance(13_000, false);
        assert_eq!(m.phase, MatchPhase::Playing);
    }
}
