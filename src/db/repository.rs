//! SQLite-backed score store.

use std::path::Path;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument, warn};

use crate::db::{DbError, GameScore, NewGameScore, NewUser, ScoreStore, Scores, User, schema};
use crate::game::Scorer;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Milliseconds a connection waits on a locked database before failing.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Database repository for user and score operations.
///
/// Holds only the path; each operation opens its own connection and drops it
/// before returning.
#[derive(Debug, Clone)]
pub struct GameRepository {
    db_path: String,
}

impl GameRepository {
    /// Creates a repository for the database at the given path without
    /// touching the file.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Self {
        info!(path = %db_path, "Creating GameRepository");
        Self { db_path }
    }

    /// Opens the database at `path`, creating the file and tables if absent.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the file cannot be opened or a migration fails.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let db_path = path.as_ref().to_string_lossy().into_owned();
        let repo = Self::new(db_path);
        repo.migrate()?;
        Ok(repo)
    }

    /// Applies any pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a migration fails.
    #[instrument(skip(self))]
    pub fn migrate(&self) -> Result<(), DbError> {
        let mut conn = self.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::backend(format!("Migration failed: {}", e)))?;
        info!(count = applied.len(), "Migrations applied");
        Ok(())
    }

    /// Path of the backing database file.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Establishes a database connection with foreign keys enforced.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        let mut conn = SqliteConnection::establish(&self.db_path).map_err(|e| {
            DbError::backend(format!("Failed to connect to '{}': {}", self.db_path, e))
        })?;
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            BUSY_TIMEOUT_MS
        ))?;
        Ok(conn)
    }
}

impl ScoreStore for GameRepository {
    #[instrument(skip(self))]
    fn create_user(&self, username: &str) -> Result<User, DbError> {
        debug!(username = %username, "Creating user");
        let mut conn = self.connection()?;

        let user = diesel::insert_into(schema::users::table)
            .values(&NewUser::new(username.to_string()))
            .returning(User::as_returning())
            .get_result(&mut conn)?;

        info!(user_id = user.id(), username = %user.username(), "User created");
        Ok(user)
    }

    #[instrument(skip(self))]
    fn get_user(&self, user_id: i32) -> Result<Option<User>, DbError> {
        let mut conn = self.connection()?;

        let user = schema::users::table
            .find(user_id)
            .select(User::as_select())
            .first(&mut conn)
            .optional()?;

        debug!(user_id, found = user.is_some(), "User lookup");
        Ok(user)
    }

    #[instrument(skip(self))]
    fn ensure_game_row(&self, user_id: i32) -> Result<bool, DbError> {
        let mut conn = self.connection()?;

        let inserted = diesel::insert_into(schema::game_scores::table)
            .values(&NewGameScore::new(user_id))
            .on_conflict(schema::game_scores::user_id)
            .do_nothing()
            .execute(&mut conn)?;

        if inserted > 0 {
            info!(user_id, "Score row created");
        }
        Ok(inserted > 0)
    }

    #[instrument(skip(self))]
    fn increment_score(&self, user_id: i32, scorer: Scorer) -> Result<bool, DbError> {
        use schema::game_scores::dsl;

        let mut conn = self.connection()?;
        let target = dsl::game_scores.filter(dsl::user_id.eq(user_id));

        let updated = match scorer {
            Scorer::Player => diesel::update(target)
                .set(dsl::score_player.eq(dsl::score_player + 1))
                .execute(&mut conn)?,
            Scorer::Ai => diesel::update(target)
                .set(dsl::score_ai.eq(dsl::score_ai + 1))
                .execute(&mut conn)?,
        };

        if updated == 0 {
            warn!(user_id, %scorer, "No score row to increment");
        } else {
            debug!(user_id, %scorer, "Score incremented");
        }
        Ok(updated > 0)
    }

    #[instrument(skip(self))]
    fn get_scores(&self, user_id: i32) -> Result<Option<Scores>, DbError> {
        let mut conn = self.connection()?;

        let row = schema::game_scores::table
            .filter(schema::game_scores::user_id.eq(user_id))
            .select(GameScore::as_select())
            .first(&mut conn)
            .optional()?;

        debug!(user_id, found = row.is_some(), "Scores loaded");
        Ok(row.map(Scores::from))
    }
}
