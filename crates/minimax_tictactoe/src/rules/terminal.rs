//! Terminal state evaluation.

use super::draw::is_full;
use super::win::winner;
use crate::{Board, Outcome};
use tracing::instrument;

/// Returns the result of the game if it is over.
///
/// A winner takes precedence over a full board.
#[instrument(level = "trace", skip(board), ret)]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(player) = winner(board) {
        Some(Outcome::Won(player))
    } else if is_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// Checks if the game is over: someone has a line or the board is full.
pub fn is_terminal(board: &Board) -> bool {
    outcome(board).is_some()
}

/// Returns the utility of a terminal board.
///
/// `Some(1)` if X has won, `Some(-1)` if O has won, `Some(0)` for a draw,
/// `None` while the game is still running.
pub fn utility(board: &Board) -> Option<i32> {
    outcome(board).map(Outcome::utility)
}
