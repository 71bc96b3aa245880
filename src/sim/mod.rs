//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only, owned by the context
//! - Integer-grid entities, float velocities
//! - No rendering or platform dependencies beyond the input snapshot type

pub mod phase;
pub mod rect;
pub mod state;
pub mod tick;

pub use phase::{MatchPhase, MatchState};
pub use rect::Rect;
pub use state::{Ball, GameRng, GameState, Paddle, Score, Side};
pub use tick::step;
