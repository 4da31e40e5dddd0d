//! Tests for move parsing and round resolution.

use strictly_rps::{Move, Outcome, Scorer, resolve};
use strum::IntoEnumIterator;

#[test]
fn test_equal_moves_tie() {
    for m in Move::iter() {
        assert_eq!(resolve(m, m), Outcome::Tie, "{m} vs itself");
    }
}

#[test]
fn test_winning_pairs() {
    assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::Win);
    assert_eq!(resolve(Move::Paper, Move::Rock), Outcome::Win);
    assert_eq!(resolve(Move::Scissors, Move::Paper), Outcome::Win);
}

#[test]
fn test_losing_pairs() {
    assert_eq!(resolve(Move::Scissors, Move::Rock), Outcome::Loss);
    assert_eq!(resolve(Move::Rock, Move::Paper), Outcome::Loss);
    assert_eq!(resolve(Move::Paper, Move::Scissors), Outcome::Loss);
}

#[test]
fn test_resolution_is_antisymmetric() {
    for a in Move::iter() {
        for b in Move::iter() {
            let expected = match resolve(a, b) {
                Outcome::Win => Outcome::Loss,
                Outcome::Loss => Outcome::Win,
                Outcome::Tie => Outcome::Tie,
            };
            assert_eq!(resolve(b, a), expected, "{a} vs {b}");
        }
    }
}

#[test]
fn test_parse_wire_names() {
    assert_eq!(Move::parse("piatra").expect("piatra"), Move::Rock);
    assert_eq!(Move::parse("hartie").expect("hartie"), Move::Paper);
    assert_eq!(Move::parse("foarfeca").expect("foarfeca"), Move::Scissors);
}

#[test]
fn test_parse_rejects_unknown_move() {
    let err = Move::parse("nevalid").expect_err("nevalid should not parse");
    assert_eq!(err.input, "nevalid");
    assert!(Move::parse("rock").is_err());
    assert!(Move::parse("").is_err());
    assert!(Move::parse("Piatra").is_err());
}

#[test]
fn test_display_matches_wire_name() {
    for m in Move::ALL {
        assert_eq!(Move::parse(&m.to_string()).expect("display round trip"), m);
    }
    assert_eq!(Move::Rock.as_ref(), "piatra");
}

#[test]
fn test_serde_uses_wire_names() {
    let json = serde_json::to_string(&Move::Scissors).expect("serialize");
    assert_eq!(json, "\"foarfeca\"");
    let parsed: Move = serde_json::from_str("\"hartie\"").expect("deserialize");
    assert_eq!(parsed, Move::Paper);

    let outcome = serde_json::to_string(&Outcome::Tie).expect("serialize");
    assert_eq!(outcome, "\"tie\"");
}

#[test]
fn test_outcome_scorer() {
    assert_eq!(Outcome::Win.scorer(), Some(Scorer::Player));
    assert_eq!(Outcome::Loss.scorer(), Some(Scorer::Ai));
    assert_eq!(Outcome::Tie.scorer(), None);
}
