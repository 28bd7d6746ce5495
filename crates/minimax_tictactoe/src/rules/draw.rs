//! Full-board detection for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
///
/// A full board with no winner is a draw.
#[instrument(level = "trace", skip(board), ret)]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|(_, cell)| !cell.is_empty())
}
