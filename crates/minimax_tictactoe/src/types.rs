//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    #[serde(alias = "x")]
    X,
    /// Player O (goes second, minimizes utility).
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Utility of a win for this player: +1 for X, -1 for O.
    pub fn win_utility(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// Whether this player maximizes utility during search.
    pub fn is_maximizer(self) -> bool {
        self == Player::X
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character symbol used in board text.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }

    /// Parses a board text character.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Occupied(Player::X)),
            'O' | 'o' => Some(Cell::Occupied(Player::O)),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Game ended with three in a line.
    #[display("{} wins", _0)]
    Won(Player),
    /// Board filled with no line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Utility value of the outcome: +1 X wins, -1 O wins, 0 draw.
    pub fn utility(self) -> i32 {
        match self {
            Outcome::Won(player) => player.win_utility(),
            Outcome::Draw => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_flips() {
        for player in Player::iter() {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
        }
    }

    #[test]
    fn test_only_x_maximizes() {
        assert!(Player::X.is_maximizer());
        assert!(!Player::O.is_maximizer());
    }

    #[test]
    fn test_symbols_parse_back() {
        for cell in [Cell::Empty, Cell::Occupied(Player::X), Cell::Occupied(Player::O)] {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
        assert_eq!(Cell::from_symbol('?'), None);
    }

    #[test]
    fn test_outcome_utility() {
        assert_eq!(Outcome::Won(Player::X).utility(), 1);
        assert_eq!(Outcome::Won(Player::O).utility(), -1);
        assert_eq!(Outcome::Draw.utility(), 0);
        assert_eq!(Outcome::Won(Player::O).to_string(), "O wins");
    }

    #[test]
    fn test_player_deserializes_lowercase() {
        let player: Player = serde_json::from_str("\"o\"").unwrap();
        assert_eq!(player, Player::O);
    }
}
