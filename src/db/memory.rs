//! In-process score store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, instrument};

use crate::db::{DbError, DbErrorKind, ScoreStore, Scores, User};
use crate::game::Scorer;

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    scores: HashMap<i32, Scores>,
}

/// [`ScoreStore`] kept entirely in memory.
///
/// Mirrors the SQLite constraints: usernames are unique and score rows may
/// only reference existing users. Ids are assigned from 1 upward.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, DbError> {
        self.tables
            .lock()
            .map_err(|e| DbError::backend(format!("Store lock poisoned: {}", e)))
    }
}

impl ScoreStore for MemoryStore {
    #[instrument(skip(self))]
    fn create_user(&self, username: &str) -> Result<User, DbError> {
        let mut tables = self.lock()?;
        if tables.users.iter().any(|u| u.username() == username) {
            return Err(DbError::new(DbErrorKind::DuplicateUsername));
        }
        let id = i32::try_from(tables.users.len() + 1)
            .map_err(|e| DbError::backend(format!("User id overflow: {}", e)))?;
        let user = User::new(id, username.to_string());
        tables.users.push(user.clone());
        debug!(user_id = id, "User created");
        Ok(user)
    }

    #[instrument(skip(self))]
    fn get_user(&self, user_id: i32) -> Result<Option<User>, DbError> {
        let tables = self.lock()?;
        Ok(tables.users.iter().find(|u| *u.id() == user_id).cloned())
    }

    #[instrument(skip(self))]
    fn ensure_game_row(&self, user_id: i32) -> Result<bool, DbError> {
        let mut tables = self.lock()?;
        if !tables.users.iter().any(|u| *u.id() == user_id) {
            return Err(DbError::new(DbErrorKind::UnknownUser));
        }
        if tables.scores.contains_key(&user_id) {
            return Ok(false);
        }
        tables.scores.insert(user_id, Scores::default());
        Ok(true)
    }

    #[instrument(skip(self))]
    fn increment_score(&self, user_id: i32, scorer: Scorer) -> Result<bool, DbError> {
        let mut tables = self.lock()?;
        let Some(scores) = tables.scores.get_mut(&user_id) else {
            return Ok(false);
        };
        *scores = match scorer {
            Scorer::Player => Scores::new(scores.score_player() + 1, *scores.score_ai()),
            Scorer::Ai => Scores::new(*scores.score_player(), scores.score_ai() + 1),
        };
        Ok(true)
    }

    #[instrument(skip(self))]
    fn get_scores(&self, user_id: i32) -> Result<Option<Scores>, DbError> {
        let tables = self.lock()?;
        Ok(tables.scores.get(&user_id).copied())
    }
}
