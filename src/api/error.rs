//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use tracing::{error, warn};

use super::dto::ErrorBody;
use crate::db::DbErrorKind;
use crate::service::ServiceError;

/// Error returned by a request handler.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ApiError {
    /// Bad or missing input. 400.
    #[display("{}", _0)]
    Validation(#[error(not(source))] String),
    /// Username already taken. 400.
    #[display("Username already exists")]
    DuplicateUsername,
    /// Requested resource does not exist. 404.
    #[display("{}", _0)]
    NotFound(#[error(not(source))] String),
    /// Unexpected storage failure. 500, message exposed to the caller.
    #[display("{}", _0)]
    Persistence(#[error(not(source))] String),
}

impl ApiError {
    /// Maps a service failure, prefixing 500 messages with `context`.
    ///
    /// An unknown user on `/start_game` maps to 404 so that no score row is
    /// ever written for a user that does not exist.
    pub fn from_service(err: ServiceError, context: &str) -> Self {
        match err {
            ServiceError::EmptyUsername => Self::Validation("Username is required".to_string()),
            ServiceError::NoScores { .. } => {
                Self::NotFound("No scores found for this user".to_string())
            }
            ServiceError::Db(db) => match db.kind {
                DbErrorKind::DuplicateUsername => Self::DuplicateUsername,
                DbErrorKind::UnknownUser => Self::NotFound("User not found".to_string()),
                DbErrorKind::Backend(message) => {
                    Self::Persistence(format!("{}: {}", context, message))
                }
            },
            other @ ServiceError::MissingScoreRow { .. } => {
                Self::Persistence(format!("{}: {}", context, other))
            }
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DuplicateUsername => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, error = %self, "Request failed");
        } else {
            warn!(%status, error = %self, "Request rejected");
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
