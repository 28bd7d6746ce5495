//! Minimax Games - command-line front end for the tic-tac-toe engine.
//!
//! The engine itself lives in [`minimax_tictactoe`]; this crate adds
//! configuration, logging setup, and the terminal game loops.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod play;

pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use play::{PlayError, play_interactive, self_play};
