//! Strictly RPS library - rock-paper-scissors against the computer over HTTP
//!
//! Players register a username, throw moves against a randomized opponent,
//! and read back cumulative win counts persisted in SQLite.
//!
//! # Architecture
//!
//! - **Game**: moves, outcome resolution, and the computer opponent
//! - **Db**: the [`ScoreStore`] seam with SQLite and in-memory implementations
//! - **Service**: round play and score bookkeeping over an injected store
//! - **Api**: axum routes translating HTTP requests into service calls
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use strictly_rps::{AppState, GameRepository, RandomOpponent, create_router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let repository = GameRepository::open("game.db")?;
//! let state = AppState::from_parts(Arc::new(repository), Arc::new(RandomOpponent));
//! let app = create_router(state);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod config;
mod db;
mod game;
mod service;

// Crate-level exports - HTTP surface
pub use api::{
    ApiError, AppState, CreateUserRequest, CreateUserResponse, ErrorBody, MessageBody,
    StartGameRequest, create_router,
};

// Crate-level exports - Configuration
pub use config::{DEFAULT_DB_PATH, DEFAULT_HOST, DEFAULT_PORT, ServerConfig};

// Crate-level exports - Persistence
pub use db::{
    DbError, DbErrorKind, GameRepository, GameScore, MemoryStore, NewGameScore, NewUser,
    ScoreStore, Scores, User,
};

// Crate-level exports - Game rules
pub use game::{FixedOpponent, Move, MoveParseError, Opponent, Outcome, RandomOpponent, Scorer, resolve};

// Crate-level exports - Service layer
pub use service::{GameService, Round, ServiceError};
