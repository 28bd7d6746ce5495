//! Legal actions and state transitions.

use super::turn::next_player;
use crate::{Action, Board, Cell, InvalidAction};
use std::collections::BTreeSet;
use tracing::{instrument, trace};

/// Returns every empty cell as an action.
///
/// The set iterates in row-major order, which fixes the search's
/// tie-breaking.
#[instrument(level = "trace", skip(board))]
pub fn legal_actions(board: &Board) -> BTreeSet<Action> {
    board
        .cells()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(action, _)| action)
        .collect()
}

/// Returns the board that results from the player to move taking `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidAction::OutOfRange`] if either coordinate is off the
/// board and [`InvalidAction::Occupied`] if the cell already holds a mark.
#[instrument(level = "trace", skip(board))]
pub fn apply(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    match board.get(action) {
        None => Err(InvalidAction::OutOfRange(action)),
        Some(Cell::Occupied(_)) => Err(InvalidAction::Occupied(action)),
        Some(Cell::Empty) => {
            let mover = next_player(board);
            trace!(player = %mover, "Placing mark");
            Ok(board.with_cell(action, Cell::Occupied(mover)))
        }
    }
}

/// Pairs every legal action with the board it produces, row-major.
///
/// Equivalent to calling [`apply`] on each of [`legal_actions`], with the
/// mover derived once for the whole set.
pub(crate) fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let mark = Cell::from(next_player(board));
    legal_actions(board)
        .into_iter()
        .map(move |action| (action, board.with_cell(action, mark)))
}
