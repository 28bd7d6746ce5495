//! Win detection logic for tic-tac-toe.

use crate::{Action, Board, Player};
use tracing::instrument;

/// Lines in the order they are checked: diagonals, then rows, then columns.
const LINES: [[(usize, usize); 3]; 8] = [
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
];

/// Checks if there is a winner on the board.
///
/// Returns the occupant of the first complete line found. Diagonals are
/// scanned before rows and rows before columns, so on a board with more
/// than one complete line a diagonal wins.
#[instrument(level = "trace", skip(board), ret)]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&line| line_owner(board, line))
}

fn line_owner(board: &Board, line: [(usize, usize); 3]) -> Option<Player> {
    let [a, b, c] = line.map(|coords| board.get(Action::from(coords)));
    let owner = a?.player()?;
    (a == b && b == c).then_some(owner)
}
