//! Game business logic layer.

use std::sync::Arc;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use crate::db::{DbError, ScoreStore, Scores, User};
use crate::game::{Move, Opponent, Outcome, resolve};

/// A single played round, as reported back to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Round {
    player_move: Move,
    ai_move: Move,
    result: Outcome,
}

/// Failure of a service operation.
#[derive(Debug, Clone, Display, Error)]
pub enum ServiceError {
    /// Username was empty.
    #[display("Username is required")]
    EmptyUsername,
    /// The user has never played, so there is no score row.
    #[display("No scores found for user {}", user_id)]
    NoScores {
        /// Requested user.
        user_id: i32,
    },
    /// The score row vanished between being ensured and being incremented.
    #[display("Score row missing for user {} after creation", user_id)]
    MissingScoreRow {
        /// Affected user.
        user_id: i32,
    },
    /// Storage failure.
    #[display("{}", _0)]
    Db(DbError),
}

impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        Self::Db(err)
    }
}

/// Service layer for user and round operations.
///
/// Wraps a [`ScoreStore`] and an [`Opponent`]; both are injected so tests can
/// substitute an in-memory store and a fixed opponent.
#[derive(Debug, Clone)]
pub struct GameService {
    store: Arc<dyn ScoreStore>,
    opponent: Arc<dyn Opponent>,
}

impl GameService {
    /// Creates a new service backed by the given store and opponent.
    #[instrument(skip(store, opponent))]
    pub fn new(store: Arc<dyn ScoreStore>, opponent: Arc<dyn Opponent>) -> Self {
        info!("Creating GameService");
        Self { store, opponent }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<dyn ScoreStore> {
        &self.store
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// [`ServiceError::EmptyUsername`] for an empty name, or a
    /// [`ServiceError::Db`] for duplicates and storage failures.
    #[instrument(skip(self))]
    pub fn create_user(&self, username: &str) -> Result<User, ServiceError> {
        if username.is_empty() {
            debug!("Rejecting empty username");
            return Err(ServiceError::EmptyUsername);
        }
        Ok(self.store.create_user(username)?)
    }

    /// Plays one round for `user_id` and records the result.
    ///
    /// Ties leave both counters unchanged but still create the score row.
    #[instrument(skip(self))]
    pub fn play(&self, user_id: i32, player_move: Move) -> Result<Round, ServiceError> {
        let ai_move = self.opponent.pick();
        let result = resolve(player_move, ai_move);

        self.store.ensure_game_row(user_id)?;

        if let Some(scorer) = result.scorer() {
            if !self.store.increment_score(user_id, scorer)? {
                error!(user_id, %scorer, "Score row missing after ensure");
                return Err(ServiceError::MissingScoreRow { user_id });
            }
        }

        info!(user_id, %player_move, %ai_move, %result, "Round played");
        Ok(Round {
            player_move,
            ai_move,
            result,
        })
    }

    /// Returns the cumulative counters for `user_id`.
    #[instrument(skip(self))]
    pub fn scores(&self, user_id: i32) -> Result<Scores, ServiceError> {
        self.store
            .get_scores(user_id)?
            .ok_or(ServiceError::NoScores { user_id })
    }
}
