//! Database models.

use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// Registered player.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Identifiable, Selectable, Getters, new)]
#[diesel(table_name = schema::users)]
pub struct User {
    id: i32,
    username: String,
}

/// Insertable user model for creating new users.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::users)]
pub struct NewUser {
    username: String,
}

/// Cumulative score row, one per user.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable, Getters)]
#[diesel(table_name = schema::game_scores)]
#[diesel(belongs_to(User))]
pub struct GameScore {
    id: i32,
    user_id: i32,
    score_player: i32,
    score_ai: i32,
}

/// Insertable score row. Counters start at their column defaults.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::game_scores)]
pub struct NewGameScore {
    user_id: i32,
}

/// The two counters returned to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters, new)]
pub struct Scores {
    score_player: i32,
    score_ai: i32,
}

impl Scores {
    /// Total rounds that produced a winner.
    pub fn decided(&self) -> i32 {
        self.score_player + self.score_ai
    }
}

impl From<GameScore> for Scores {
    fn from(row: GameScore) -> Self {
        Self::new(row.score_player, row.score_ai)
    }
}
