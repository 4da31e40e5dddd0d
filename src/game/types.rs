//! Core domain types for rock-paper-scissors.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, EnumIter};
use tracing::instrument;

/// A hand shape thrown in a round.
///
/// The wire names are the Romanian words used by the public API:
/// `piatra` (rock), `hartie` (paper) and `foarfeca` (scissors).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumIter,
    strum::Display,
    strum::EnumString,
)]
pub enum Move {
    /// Rock, beats scissors.
    #[serde(rename = "piatra")]
    #[strum(serialize = "piatra")]
    Rock,
    /// Paper, beats rock.
    #[serde(rename = "hartie")]
    #[strum(serialize = "hartie")]
    Paper,
    /// Scissors, beats paper.
    #[serde(rename = "foarfeca")]
    #[strum(serialize = "foarfeca")]
    Scissors,
}

impl Move {
    /// Every legal move, in a fixed order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Returns the move this one defeats.
    #[instrument]
    pub fn victim(self) -> Self {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// Returns true if `self` defeats `other`.
    #[instrument]
    pub fn beats(self, other: Move) -> bool {
        self.victim() == other
    }

    /// Parses a wire name, rejecting anything outside the fixed move set.
    ///
    /// # Errors
    ///
    /// Returns [`MoveParseError`] carrying the rejected input.
    #[instrument(skip(s), fields(s = %s))]
    pub fn parse(s: &str) -> Result<Self, MoveParseError> {
        Move::from_str(s).map_err(|_| MoveParseError::new(s))
    }
}

/// A move string that is not one of the three legal wire names.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move: '{}'", input)]
pub struct MoveParseError {
    /// The rejected input.
    pub input: String,
}

impl MoveParseError {
    /// Creates a parse error for the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Result of a round from the player's perspective.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    /// Player's move beat the opponent's.
    Win,
    /// Opponent's move beat the player's.
    Loss,
    /// Both threw the same move.
    Tie,
}

impl Outcome {
    /// Which counter a round with this outcome increments, if any.
    #[instrument]
    pub fn scorer(self) -> Option<Scorer> {
        match self {
            Outcome::Win => Some(Scorer::Player),
            Outcome::Loss => Some(Scorer::Ai),
            Outcome::Tie => None,
        }
    }
}

/// One of the two cumulative counters kept per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Scorer {
    /// The human player's win count.
    #[display("player")]
    Player,
    /// The computer opponent's win count.
    #[display("ai")]
    Ai,
}
