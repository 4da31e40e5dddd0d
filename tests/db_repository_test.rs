//! Tests for the SQLite score store.

use strictly_rps::{DbErrorKind, GameRepository, ScoreStore, Scorer, Scores};
use tempfile::TempDir;

/// Creates a temporary directory holding a migrated database, returns the
/// directory handle (must stay in scope to keep the file alive) and a ready
/// repository.
fn setup_test_db() -> (TempDir, GameRepository) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let repo = GameRepository::open(dir.path().join("game.db")).expect("Failed to open database");
    (dir, repo)
}

#[test]
fn test_open_creates_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("fresh.db");
    assert!(!path.exists());
    GameRepository::open(&path).expect("Open failed");
    assert!(path.exists());
}

#[test]
fn test_open_twice_is_harmless() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("game.db");
    let first = GameRepository::open(&path).expect("First open failed");
    first.create_user("Alice").expect("Create failed");

    let second = GameRepository::open(&path).expect("Second open failed");
    let user = second.get_user(1).expect("Query failed");
    assert_eq!(user.expect("User persisted").username(), "Alice");
}

#[test]
fn test_create_user() {
    let (_db, repo) = setup_test_db();
    let user = repo.create_user("alice").expect("Create failed");
    assert_eq!(user.username(), "alice");
    assert_eq!(*user.id(), 1);

    let second = repo.create_user("bob").expect("Create failed");
    assert_eq!(*second.id(), 2);
}

#[test]
fn test_create_user_duplicate_name_fails() {
    let (_db, repo) = setup_test_db();
    repo.create_user("Bob").expect("First create failed");
    let err = repo.create_user("Bob").expect_err("Duplicate name should fail");
    assert_eq!(err.kind, DbErrorKind::DuplicateUsername);
}

#[test]
fn test_get_user_not_found() {
    let (_db, repo) = setup_test_db();
    assert!(repo.get_user(42).expect("Query failed").is_none());
}

#[test]
fn test_ensure_game_row_is_idempotent() {
    let (_db, repo) = setup_test_db();
    let user = repo.create_user("Carol").expect("Create failed");

    assert!(repo.ensure_game_row(*user.id()).expect("Ensure failed"));
    assert!(!repo.ensure_game_row(*user.id()).expect("Ensure failed"));

    let scores = repo.get_scores(*user.id()).expect("Query failed");
    assert_eq!(scores, Some(Scores::new(0, 0)));
}

#[test]
fn test_ensure_game_row_unknown_user_fails() {
    let (_db, repo) = setup_test_db();
    let err = repo.ensure_game_row(99).expect_err("Orphan row should be rejected");
    assert_eq!(err.kind, DbErrorKind::UnknownUser);
    assert!(repo.get_scores(99).expect("Query failed").is_none());
}

#[test]
fn test_increment_score() {
    let (_db, repo) = setup_test_db();
    let user = repo.create_user("Dave").expect("Create failed");
    let id = *user.id();
    repo.ensure_game_row(id).expect("Ensure failed");

    assert!(repo.increment_score(id, Scorer::Player).expect("Increment failed"));
    assert!(repo.increment_score(id, Scorer::Player).expect("Increment failed"));
    assert!(repo.increment_score(id, Scorer::Ai).expect("Increment failed"));

    let scores = repo.get_scores(id).expect("Query failed").expect("Row exists");
    assert_eq!(*scores.score_player(), 2);
    assert_eq!(*scores.score_ai(), 1);
}

#[test]
fn test_increment_without_row_is_noop() {
    let (_db, repo) = setup_test_db();
    let user = repo.create_user("Eve").expect("Create failed");

    let touched = repo
        .increment_score(*user.id(), Scorer::Ai)
        .expect("Increment failed");
    assert!(!touched);
    assert!(repo.get_scores(*user.id()).expect("Query failed").is_none());
}

#[test]
fn test_scores_are_per_user() {
    let (_db, repo) = setup_test_db();
    let a = *repo.create_user("Frank").expect("Create failed").id();
    let b = *repo.create_user("Grace").expect("Create failed").id();
    repo.ensure_game_row(a).expect("Ensure failed");
    repo.ensure_game_row(b).expect("Ensure failed");

    repo.increment_score(a, Scorer::Player).expect("Increment failed");

    assert_eq!(repo.get_scores(a).expect("Query failed"), Some(Scores::new(1, 0)));
    assert_eq!(repo.get_scores(b).expect("Query failed"), Some(Scores::new(0, 0)));
}

#[test]
fn test_unreachable_path_is_backend_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("missing_dir").join("game.db");
    let err = GameRepository::open(&path).expect_err("Open should fail");
    assert!(matches!(err.kind, DbErrorKind::Backend(_)));
}
