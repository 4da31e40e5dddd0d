//! Round resolution.

use tracing::{debug, instrument};

use super::{Move, Outcome};

/// Resolves a round between the player and the computer.
///
/// Total over all nine move pairs; equal moves tie.
#[instrument]
pub fn resolve(player: Move, ai: Move) -> Outcome {
    let outcome = if player == ai {
        Outcome::Tie
    } else if player.beats(ai) {
        Outcome::Win
    } else {
        Outcome::Loss
    };
    debug!(%player, %ai, %outcome, "Round resolved");
    outcome
}
