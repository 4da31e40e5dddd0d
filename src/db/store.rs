//! The persistence seam handed to the service layer.

use crate::db::{DbError, Scores, User};
use crate::game::Scorer;

/// Storage for users and their cumulative scores.
///
/// Implementations are shared across request handlers, so every method takes
/// `&self` and must be safe to call concurrently.
pub trait ScoreStore: Send + Sync + std::fmt::Debug {
    /// Inserts a user and returns the stored row.
    ///
    /// # Errors
    ///
    /// [`DbErrorKind::DuplicateUsername`](crate::db::DbErrorKind) if the name is taken.
    fn create_user(&self, username: &str) -> Result<User, DbError>;

    /// Looks up a user by id.
    fn get_user(&self, user_id: i32) -> Result<Option<User>, DbError>;

    /// Creates the score row for `user_id` with both counters at zero, unless
    /// one already exists. Returns true if a row was inserted.
    ///
    /// # Errors
    ///
    /// [`DbErrorKind::UnknownUser`](crate::db::DbErrorKind) if no such user exists.
    fn ensure_game_row(&self, user_id: i32) -> Result<bool, DbError>;

    /// Adds one to the named counter. Returns false, changing nothing, when
    /// the user has no score row.
    fn increment_score(&self, user_id: i32, scorer: Scorer) -> Result<bool, DbError>;

    /// Reads both counters, or `None` if the user has never played.
    fn get_scores(&self, user_id: i32) -> Result<Option<Scores>, DbError>;
}
