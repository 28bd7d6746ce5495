//! Tests for minimax search and action selection.

use minimax_tictactoe::{
    Action, Board, Cell, Outcome, Player, apply, best_action, initial_state, is_terminal,
    legal_actions, next_player, outcome, ranked_actions, search_value, search_value_with_stats,
    utility,
};

const X: Cell = Cell::Occupied(Player::X);
const O: Cell = Cell::Occupied(Player::O);
const E: Cell = Cell::Empty;

#[test]
fn test_opening_move_is_non_losing() {
    let board = initial_state();
    let action = best_action(&board).expect("Empty board has moves");
    let child = apply(&board, action).expect("Engine move is legal");
    assert_eq!(search_value(&child, false), 0);
}

#[test]
fn test_opening_tie_break_is_row_major() {
    // Every opening draws, so the first cell wins the tie.
    assert_eq!(best_action(&initial_state()), Some(Action::new(0, 0)));
}

#[test]
fn test_empty_board_value_is_draw() {
    let (value, stats) = search_value_with_stats(&initial_state(), true);
    assert_eq!(value, 0);
    // Size of the full tic-tac-toe game tree, root included.
    assert_eq!(stats.nodes, 549_946);
    assert_eq!(stats.leaves, 255_168);
}

#[test]
fn test_takes_immediate_win() {
    let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
    assert_eq!(next_player(&board), Player::X);

    let action = best_action(&board).expect("Board is not terminal");
    assert_eq!(action, Action::new(0, 2));

    let after = apply(&board, action).expect("Legal move");
    assert_eq!(utility(&after), Some(1));
}

#[test]
fn test_o_takes_immediate_win() {
    let board = Board::from_rows([[X, X, E], [O, O, E], [X, E, E]]);
    assert_eq!(next_player(&board), Player::O);

    let action = best_action(&board).expect("Board is not terminal");
    assert_eq!(action, Action::new(1, 2));

    let after = apply(&board, action).expect("Legal move");
    assert_eq!(utility(&after), Some(-1));
}

#[test]
fn test_no_action_on_terminal_boards() {
    let boards = [
        Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]),
        Board::from_rows([[O, X, X], [X, O, X], [X, X, O]]),
        Board::from_rows([[X, O, X], [O, X, O], [O, X, O]]),
    ];
    for board in boards {
        assert!(is_terminal(&board));
        assert_eq!(best_action(&board), None);
    }
}

#[test]
fn test_best_action_matches_ranked_scores() {
    let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
    let ranked = ranked_actions(&board);
    assert_eq!(ranked.len(), legal_actions(&board).len());

    let top = ranked.iter().map(|s| s.score).max().expect("Has actions");
    let first_top = ranked
        .iter()
        .find(|s| s.score == top)
        .map(|s| s.action);
    assert_eq!(best_action(&board), first_top);
}

#[test]
fn test_avoids_opposite_corner_fork() {
    let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);
    assert_eq!(next_player(&board), Player::O);
    // O must not play a corner here; an edge holds the draw.
    let action = best_action(&board).expect("Board is not terminal");
    let child = apply(&board, action).expect("Legal move");
    assert_eq!(search_value(&child, true), 0);
    assert!(
        [(0, 1), (1, 0), (1, 2), (2, 1)]
            .map(Action::from)
            .contains(&action),
        "expected an edge, got {action}"
    );
}

#[test]
fn test_self_play_draws() {
    let mut board = initial_state();
    let mut plies = 0;
    while let Some(action) = best_action(&board) {
        board = apply(&board, action).expect("Engine move is legal");
        plies += 1;
    }
    assert_eq!(plies, 9);
    assert_eq!(outcome(&board), Some(Outcome::Draw));
}
