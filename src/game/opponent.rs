//! Computer opponents.

use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

use super::Move;

/// Source of the computer's move for each round.
pub trait Opponent: Send + Sync + std::fmt::Debug {
    /// Picks the computer's move for the next round.
    fn pick(&self) -> Move;
}

/// Opponent that draws uniformly from the three moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOpponent;

impl Opponent for RandomOpponent {
    #[instrument(skip(self))]
    fn pick(&self) -> Move {
        // ALL is non-empty, so choose always yields a move
        let pick = Move::ALL
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(Move::Rock);
        debug!(ai_move = %pick, "Opponent picked move");
        pick
    }
}

/// Opponent that always throws the same move. Used for deterministic play.
#[derive(Debug, Clone, Copy)]
pub struct FixedOpponent(pub Move);

impl Opponent for FixedOpponent {
    #[instrument(skip(self))]
    fn pick(&self) -> Move {
        self.0
    }
}
