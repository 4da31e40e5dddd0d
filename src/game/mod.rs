//! Rock-paper-scissors moves, outcome resolution, and the computer opponent.

mod opponent;
mod rules;
mod types;

pub use opponent::{FixedOpponent, Opponent, RandomOpponent};
pub use rules::resolve;
pub use types::{Move, MoveParseError, Outcome, Scorer};
