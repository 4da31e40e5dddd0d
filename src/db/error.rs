//! Database error types.

use derive_more::{Display, Error};
use diesel::result::DatabaseErrorKind;
use tracing::instrument;

/// Category of a database failure.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DbErrorKind {
    /// A user with this username already exists.
    #[display("Username already exists")]
    DuplicateUsername,
    /// The referenced user id has no row in `users`.
    #[display("User not found")]
    UnknownUser,
    /// Any other storage failure.
    #[display("{}", _0)]
    Backend(String),
}

/// Database error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Database error: {} at {}:{}", kind, file, line)]
pub struct DbError {
    /// What went wrong.
    pub kind: DbErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DbError {
    /// Creates a new database error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: DbErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Creates a backend error from a message.
    #[track_caller]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::new(DbErrorKind::Backend(message.into()))
    }

    /// The message without location, suitable for API responses.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<diesel::result::Error> for DbError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                Self::new(DbErrorKind::DuplicateUsername)
            }
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                Self::new(DbErrorKind::UnknownUser)
            }
            other => Self::backend(format!("Diesel error: {}", other)),
        }
    }
}

impl From<diesel::ConnectionError> for DbError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        Self::backend(format!("Connection error: {}", err))
    }
}
