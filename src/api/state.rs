//! Shared handler state.

use std::sync::Arc;

use tracing::instrument;

use crate::db::ScoreStore;
use crate::game::Opponent;
use crate::service::GameService;

/// State cloned into every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Game logic and persistence.
    pub service: GameService,
}

impl AppState {
    /// Builds state around an existing service.
    pub fn new(service: GameService) -> Self {
        Self { service }
    }

    /// Builds state from a store and opponent.
    #[instrument(skip(store, opponent))]
    pub fn from_parts(store: Arc<dyn ScoreStore>, opponent: Arc<dyn Opponent>) -> Self {
        Self::new(GameService::new(store, opponent))
    }
}
