//! Command-line interface for minimax_games.

use clap::{Parser, Subcommand, ValueEnum};
use minimax_tictactoe::{Board, Player};
use std::path::PathBuf;

/// Minimax Games - perfect-play tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "minimax_games")]
#[command(about = "Exhaustive minimax tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./minimax.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for a board as "row col"
    BestMove {
        /// Nine cells row-major, e.g. "XO./.X./..." (X, O, or . for empty)
        board: Board,
    },

    /// Print every legal move for a board with its minimax score
    Analyze {
        /// Nine cells row-major, e.g. "XO./.X./..."
        board: Board,
    },

    /// Play against the engine on the terminal
    Play {
        /// Side the human plays (overrides config)
        #[arg(long, value_enum)]
        human: Option<Side>,

        /// Show the engine's move scores (overrides config)
        #[arg(long)]
        show_scores: bool,
    },

    /// Let the engine play both sides from the empty board
    SelfPlay,
}

/// Side selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Play X, moving first
    X,
    /// Play O, moving second
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}
