//! Turn derivation for tic-tac-toe.

use crate::{Board, Player};
use tracing::instrument;

/// Returns the player whose turn it is.
///
/// X always moves first, so O is to move exactly when O has fewer
/// marks than X.
#[instrument(level = "trace", skip(board), ret)]
pub fn next_player(board: &Board) -> Player {
    if board.count(Player::O) < board.count(Player::X) {
        Player::O
    } else {
        Player::X
    }
}
