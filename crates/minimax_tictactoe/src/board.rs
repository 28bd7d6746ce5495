//! Immutable 3x3 board value.

use crate::action::{Action, BOARD_SIZE};
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// Boards are plain `Copy` values with no public mutator. Transitions
/// go through [`crate::apply`], which returns a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit rows.
    ///
    /// The X/O count invariant is not checked here.
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell an action points at, or `None` if off the board.
    pub fn get(&self, action: Action) -> Option<Cell> {
        self.cells.get(action.row)?.get(action.col).copied()
    }

    /// Checks if the cell an action points at exists and is empty.
    pub fn is_empty_at(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Cell::Empty))
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterates every cell with its coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Action, Cell)> + '_ {
        Action::all().map(move |action| (action, self.cells[action.row][action.col]))
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Occupied(player))
            .count()
    }

    /// Counts non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|(_, cell)| !cell.is_empty()).count()
    }

    /// Returns a copy with one cell replaced. Caller checks range.
    pub(crate) fn with_cell(mut self, action: Action, cell: Cell) -> Self {
        self.cells[action.row][action.col] = cell;
        self
    }

    /// Nine-character row-major form, e.g. `"XO......."`.
    pub fn to_compact(&self) -> String {
        self.cells().map(|(_, cell)| cell.symbol()).collect()
    }
}

impl std::fmt::Display for Board {
    /// Three lines, one row each, cells separated by spaces.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
            if i + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cell symbols in row-major order.
    ///
    /// `/` and whitespace are ignored, so `"XO./.X./..O"` and the
    /// [`Display`](std::fmt::Display) form both parse.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        let mut count = 0;

        for c in s.chars().filter(|c| *c != '/' && !c.is_whitespace()) {
            let cell = Cell::from_symbol(c).ok_or(ParseBoardError::UnknownSymbol(c))?;
            if count >= BOARD_SIZE * BOARD_SIZE {
                return Err(ParseBoardError::WrongLength(count + 1));
            }
            cells[count / BOARD_SIZE][count % BOARD_SIZE] = cell;
            count += 1;
        }

        if count != BOARD_SIZE * BOARD_SIZE {
            return Err(ParseBoardError::WrongLength(count));
        }

        Ok(Self { cells })
    }
}

/// Error returned when board text cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// Character is not a cell symbol.
    #[display("Unknown cell symbol {:?}", _0)]
    UnknownSymbol(char),

    /// Text does not hold exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for ParseBoardError {}
