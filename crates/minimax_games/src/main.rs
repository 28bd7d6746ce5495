//! Minimax Games - Unified CLI
//!
//! Query the engine for moves, analyze positions, or play a game.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use minimax_games::{AppConfig, PlayError, play_interactive, self_play};
use minimax_tictactoe::{Board, best_action, next_player, ranked_actions};
use std::io::Write;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::BestMove { board } => run_best_move(&board),
        Command::Analyze { board } => run_analyze(&board),
        Command::Play { human, show_scores } => {
            let mut config = config;
            if let Some(side) = human {
                config = config.with_human(side.into());
            }
            if show_scores {
                config = config.with_show_scores(true);
            }
            run_play(&config)
        }
        Command::SelfPlay => run_self_play(),
    }
}

/// Print the optimal move for a board
#[instrument(skip(board), fields(board = %board.to_compact()))]
fn run_best_move(board: &Board) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match best_action(board) {
        Some(action) => writeln!(out, "{} {}", action.row, action.col)?,
        None => writeln!(out, "none")?,
    }
    Ok(())
}

/// Print every legal move with its score
#[instrument(skip(board), fields(board = %board.to_compact()))]
fn run_analyze(board: &Board) -> Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}\n", board)?;

    let ranked = ranked_actions(board);
    if ranked.is_empty() {
        writeln!(out, "Game is over")?;
        return Ok(());
    }

    writeln!(out, "To move: {}", next_player(board))?;
    for scored in ranked {
        writeln!(out, "  {}", scored)?;
    }
    Ok(())
}

/// Run an interactive game on the terminal
fn run_play(config: &AppConfig) -> Result<()> {
    info!("Starting interactive game");
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    match play_interactive(config, stdin, stdout) {
        Ok(_) | Err(PlayError::Quit) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Run engine vs engine
fn run_self_play() -> Result<()> {
    info!("Starting self-play");
    self_play(std::io::stdout().lock())?;
    Ok(())
}
