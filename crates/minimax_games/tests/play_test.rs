//! Tests for the terminal game loops.

use minimax_games::{AppConfig, play_interactive, self_play};
use minimax_tictactoe::{Outcome, Player};

/// Every cell in row-major order, repeated so each human turn eventually
/// reaches an empty one. Occupied cells are rejected and re-prompted.
fn first_empty_script() -> String {
    let cycle: String = (0..3)
        .flat_map(|row| (0..3).map(move |col| format!("{} {}\n", row, col)))
        .collect();
    cycle.repeat(6)
}

#[test]
fn test_engine_as_o_never_loses() {
    let config = AppConfig::default().with_human(Player::X);
    let script = first_empty_script();
    let mut out = Vec::new();

    let outcome = play_interactive(&config, script.as_bytes(), &mut out).expect("Game completes");
    assert_ne!(outcome, Outcome::Won(Player::X));

    let text = String::from_utf8(out).expect("UTF-8 output");
    assert!(text.contains("Engine (O) plays"));
    assert!(text.contains("Game over:"));
}

#[test]
fn test_engine_as_x_beats_naive_player() {
    let config = AppConfig::default().with_human(Player::O);
    let script = first_empty_script();
    let mut out = Vec::new();

    let outcome = play_interactive(&config, script.as_bytes(), &mut out).expect("Game completes");
    // Answering the corner opening with the adjacent edge is a forced loss.
    assert_eq!(outcome, Outcome::Won(Player::X));

    let text = String::from_utf8(out).expect("UTF-8 output");
    assert!(text.starts_with("You are O."));
    assert!(text.contains("Engine (X) plays 0 0"));
}

#[test]
fn test_show_scores_prints_rankings() {
    let config = AppConfig::default()
        .with_human(Player::X)
        .with_show_scores(true);
    let mut out = Vec::new();

    let _ = play_interactive(&config, "1 1\nq\n".as_bytes(), &mut out);
    let text = String::from_utf8(out).expect("UTF-8 output");
    assert!(text.contains("(0, 0) -> +0"));
}

#[test]
fn test_self_play_is_a_draw() {
    let mut out = Vec::new();
    let outcome = self_play(&mut out).expect("Self-play completes");
    assert_eq!(outcome, Outcome::Draw);

    let text = String::from_utf8(out).expect("UTF-8 output");
    assert!(text.starts_with("X plays (0, 0)"));
    assert!(text.ends_with("Game over: Draw\n"));
}
