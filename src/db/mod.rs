//! Persistence layer for users and cumulative scores.

mod error;
mod memory;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only
mod store;

pub use error::{DbError, DbErrorKind};
pub use memory::MemoryStore;
pub use models::{GameScore, NewGameScore, NewUser, Scores, User};
pub use repository::GameRepository;
pub use store::ScoreStore;
