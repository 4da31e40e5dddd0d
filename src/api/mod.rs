//! HTTP surface.
//!
//! ```text
//! GET  /home                 welcome message
//! POST /create_user          {username}          -> 201 {message, user_id}
//! POST /start_game           {user_id, move}     -> 200 {player_move, ai_move, result}
//! GET  /get_scores/{user_id}                     -> 200 {score_player, score_ai}
//! ```
//!
//! Every error body has the shape `{"error": "..."}`.

mod dto;
mod error;
mod handlers;
mod router;
mod state;

pub use dto::{CreateUserRequest, CreateUserResponse, ErrorBody, MessageBody, StartGameRequest};
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
