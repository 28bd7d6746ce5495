//! Human vs engine and engine vs engine game loops.
//!
//! Loops are written over generic readers and writers so they can be driven
//! from stdin/stdout or from in-memory buffers.

use crate::config::AppConfig;
use derive_more::{Display, Error, From};
use minimax_tictactoe::{
    Action, Board, InvalidAction, Outcome, Player, apply, best_action, initial_state,
    next_player, outcome, pick_best, ranked_actions,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Error that ends a game loop early.
#[derive(Debug, Display, Error, From)]
pub enum PlayError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    #[from]
    Io(std::io::Error),

    /// The engine produced an action the rules rejected.
    #[display("Engine played an invalid action: {}", _0)]
    #[from]
    Engine(InvalidAction),

    /// Input ended before the game finished.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// The human asked to stop.
    #[display("Player quit")]
    Quit,

    /// The engine found no action on an unfinished board.
    #[display("Engine found no move")]
    NoMove,
}

/// Plays one game between a human on `input` and the engine.
///
/// The human enters `row col`; malformed or illegal input re-prompts.
/// Entering `q` or `quit` stops the game with [`PlayError::Quit`].
#[instrument(skip_all, fields(human = %config.human()))]
pub fn play_interactive<R: BufRead, W: Write>(
    config: &AppConfig,
    mut input: R,
    mut output: W,
) -> Result<Outcome, PlayError> {
    let human = *config.human();
    let mut board = initial_state();

    writeln!(output, "You are {}. Enter moves as \"row col\" (0-2).", human)?;
    writeln!(output, "{}\n", board)?;

    loop {
        if let Some(result) = outcome(&board) {
            info!(%result, "Game finished");
            writeln!(output, "Game over: {}", result)?;
            return Ok(result);
        }

        board = if next_player(&board) == human {
            human_turn(&board, &mut input, &mut output)?
        } else {
            engine_turn(&board, *config.show_scores(), &mut output)?
        };
        writeln!(output, "{}\n", board)?;
    }
}

fn human_turn<R: BufRead, W: Write>(
    board: &Board,
    input: &mut R,
    output: &mut W,
) -> Result<Board, PlayError> {
    loop {
        write!(output, "Your move: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PlayError::InputClosed);
        }

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            return Err(PlayError::Quit);
        }

        let action = match trimmed.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match apply(board, action) {
            Ok(next) => {
                debug!(%action, "Human moved");
                return Ok(next);
            }
            Err(e) => {
                warn!(%action, error = %e, "Rejected human move");
                writeln!(output, "Invalid move: {}", e)?;
            }
        }
    }
}

fn engine_turn<W: Write>(board: &Board, show_scores: bool, output: &mut W) -> Result<Board, PlayError> {
    let action = if show_scores {
        let ranked = ranked_actions(board);
        for scored in &ranked {
            writeln!(output, "  {}", scored)?;
        }
        pick_best(board, &ranked).map(|scored| scored.action)
    } else {
        best_action(board)
    };

    let mover = next_player(board);
    let action = action.ok_or(PlayError::NoMove)?;
    debug!(player = %mover, %action, "Engine moved");
    writeln!(output, "Engine ({}) plays {} {}", mover, action.row, action.col)?;
    Ok(apply(board, action)?)
}

/// Plays the engine against itself from the empty board.
#[instrument(skip_all)]
pub fn self_play<W: Write>(mut output: W) -> Result<Outcome, PlayError> {
    let mut board = initial_state();

    while let Some(action) = best_action(&board) {
        let mover: Player = next_player(&board);
        board = apply(&board, action)?;
        writeln!(output, "{} plays {}\n{}\n", mover, action, board)?;
    }

    let result = outcome(&board).ok_or(PlayError::NoMove)?;
    info!(%result, "Self-play finished");
    writeln!(output, "Game over: {}", result)?;
    Ok(result)
}
