//! Route table and request logging.

use axum::extract::Request;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tracing::{info, instrument};

use super::handlers;
use super::state::AppState;

/// Builds the application router over the given state.
#[instrument(skip(state))]
pub fn create_router(state: AppState) -> Router {
    info!("Building router");
    Router::new()
        .route("/home", get(handlers::home))
        .route("/create_user", post(handlers::create_user))
        .route("/start_game", post(handlers::start_game))
        .route("/get_scores/{user_id}", get(handlers::get_scores))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .map_request(|req: Request| {
                    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
                    req
                })
                .map_response(|res: Response| {
                    info!(status = %res.status(), "Response sent");
                    res
                }),
        )
        .with_state(state)
}
