//! Tic-tac-toe rules and exhaustive minimax search.
//!
//! Boards are immutable values. A game starts from [`initial_state`] and
//! advances only through [`apply`], which derives the mover from the board
//! itself. [`best_action`] walks the full game tree to pick the optimal move
//! for whoever is to play.
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{apply, best_action, initial_state, is_terminal, utility};
//!
//! let mut board = initial_state();
//! while let Some(action) = best_action(&board) {
//!     board = apply(&board, action)?;
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board), Some(0));
//! # Ok::<(), minimax_tictactoe::InvalidAction>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod rules;
mod search;
mod types;

pub use action::{Action, BOARD_SIZE, InvalidAction, ParseActionError};
pub use board::{Board, ParseBoardError};
pub use rules::{apply, is_full, is_terminal, legal_actions, next_player, outcome, utility, winner};
pub use search::{
    ScoredAction, SearchStats, best_action, pick_best, ranked_actions, search_value,
    search_value_with_stats,
};
pub use types::{Cell, Outcome, Player};

/// Returns the starting position: nine empty cells, X to move.
pub fn initial_state() -> Board {
    Board::new()
}
