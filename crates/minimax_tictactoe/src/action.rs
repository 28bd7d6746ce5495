//! First-class action type for tic-tac-toe.
//!
//! An action names a cell by coordinates. It carries no player: the mover
//! is always derived from the board it is applied to.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// A move target: the (row, column) of a cell.
///
/// Ordering is row-major, so a `BTreeSet<Action>` iterates
/// top-left to bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Action {
    /// Creates a new action. Coordinates are checked when applied.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All 9 in-range actions in row-major order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Action::new(row, col)))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses `"row col"`, `"row,col"` or `"(row, col)"`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        let [row, col] = parts.as_slice() else {
            return Err(ParseActionError::new(s));
        };

        match (row.parse(), col.parse()) {
            (Ok(row), Ok(col)) => Ok(Self::new(row, col)),
            _ => Err(ParseActionError::new(s)),
        }
    }
}

/// Error returned when an action cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidAction {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Action),

    /// A coordinate lies outside 0..3.
    #[display("Cell {} is off the board", _0)]
    OutOfRange(Action),
}

impl InvalidAction {
    /// Returns the rejected action.
    pub fn action(&self) -> Action {
        match self {
            InvalidAction::Occupied(action) | InvalidAction::OutOfRange(action) => *action,
        }
    }
}

impl std::error::Error for InvalidAction {}

/// Error returned when action text is not two coordinates.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid action {:?}: expected \"row col\"", input)]
pub struct ParseActionError {
    /// The rejected input.
    pub input: String,
}

impl ParseActionError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl std::error::Error for ParseActionError {}
