//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST /create_user`.
///
/// A non-string `username` (e.g. `123`) fails to deserialize and is rejected with 400.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Desired username. Absent and empty are both rejected.
    #[serde(default)]
    pub username: Option<String>,
}

/// Successful `POST /create_user` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Id assigned to the new user.
    pub user_id: i32,
}

/// Body of `POST /start_game`.
///
/// Both fields are optional at the JSON level so that missing or unknown
/// values produce the same 400 response instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StartGameRequest {
    /// Player's id. Must be a positive integer.
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Player's move wire name.
    #[serde(default, rename = "move")]
    pub player_move: Option<String>,
}

/// Plain `{message}` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    /// The message.
    pub message: String,
}

/// Plain `{error}` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// What went wrong.
    pub error: String,
}
