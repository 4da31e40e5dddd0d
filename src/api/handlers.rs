//! Request handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::{debug, info, instrument};

use super::dto::{CreateUserRequest, CreateUserResponse, MessageBody, StartGameRequest};
use super::error::ApiError;
use super::state::AppState;
use crate::db::Scores;
use crate::game::Move;
use crate::service::{Round, ServiceError};

/// Greeting returned by `GET /home`.
pub const WELCOME_MESSAGE: &str = "Welcome to the Rock-Paper-Scissors API!";

const USERNAME_REQUIRED: &str = "Username is required";
const INVALID_PLAY: &str = "Invalid input. Ensure 'user_id' is provided and move is valid.";

/// Runs a blocking service call off the async executor.
async fn blocking<T, F>(context: &'static str, f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Persistence(format!("{}: {}", context, e)))?
        .map_err(|e| ApiError::from_service(e, context))
}

/// `GET /home`
#[instrument]
pub async fn home() -> Json<MessageBody> {
    Json(MessageBody {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// `POST /create_user`
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUserResponse>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(%rejection, "Unreadable create_user body");
        ApiError::Validation(USERNAME_REQUIRED.to_string())
    })?;
    let username = request.username.unwrap_or_default();

    let service = state.service.clone();
    let user = blocking("Failed to create user", move || {
        service.create_user(&username)
    })
    .await?;

    info!(user_id = user.id(), "User registered");
    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: "User created successfully".to_string(),
            user_id: *user.id(),
        }),
    ))
}

/// `POST /start_game`
#[instrument(skip(state, payload))]
pub async fn start_game(
    State(state): State<AppState>,
    payload: Result<Json<StartGameRequest>, JsonRejection>,
) -> Result<Json<Round>, ApiError> {
    let invalid = || ApiError::Validation(INVALID_PLAY.to_string());

    let Json(request) = payload.map_err(|rejection| {
        debug!(%rejection, "Unreadable start_game body");
        invalid()
    })?;

    let user_id = request
        .user_id
        .filter(|id| *id > 0)
        .and_then(|id| i32::try_from(id).ok())
        .ok_or_else(invalid)?;
    let player_move = request
        .player_move
        .as_deref()
        .and_then(|m| Move::parse(m).ok())
        .ok_or_else(invalid)?;

    let service = state.service.clone();
    let round = blocking("Failed to process game", move || {
        service.play(user_id, player_move)
    })
    .await?;

    Ok(Json(round))
}

/// `GET /get_scores/{user_id}`
#[instrument(skip(state, user_id))]
pub async fn get_scores(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Scores>, ApiError> {
    let Path(user_id) = user_id.map_err(|rejection| {
        debug!(%rejection, "Unreadable user id");
        ApiError::Validation("Invalid user id".to_string())
    })?;

    let service = state.service.clone();
    let scores = blocking("Failed to fetch scores", move || service.scores(user_id)).await?;

    Ok(Json(scores))
}

/// Catch-all for unknown routes.
#[instrument]
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
