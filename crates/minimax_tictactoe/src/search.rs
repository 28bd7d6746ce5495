//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. The full 3x3 game tree is small
//! enough to walk completely, so there is no pruning and no memoization:
//! every call evaluates every reachable leaf below the given board.

use crate::rules::{is_terminal, next_player, successors, utility};
use crate::{Action, Board};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Node counts gathered during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including the root.
    pub nodes: u64,
    /// Terminal boards reached.
    pub leaves: u64,
}

impl std::ops::AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
    }
}

/// An action paired with the minimax value of the board it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredAction {
    /// The action taken from the root board.
    pub action: Action,
    /// Value of optimal play after the action.
    pub score: i32,
}

impl std::fmt::Display for ScoredAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {:+}", self.action, self.score)
    }
}

/// Returns the value of `board` under optimal play.
///
/// `maximizing` selects whether the player to move at `board` takes the
/// maximum or the minimum over its children. It flips at every ply and is
/// never re-derived from the board, so callers must keep it consistent
/// with whose turn it is.
#[instrument(level = "trace", skip(board), fields(board = %board.to_compact()), ret)]
pub fn search_value(board: &Board, maximizing: bool) -> i32 {
    minimax(board, maximizing, &mut SearchStats::default())
}

/// Like [`search_value`], also reporting how many boards were visited.
pub fn search_value_with_stats(board: &Board, maximizing: bool) -> (i32, SearchStats) {
    let mut stats = SearchStats::default();
    let value = minimax(board, maximizing, &mut stats);
    (value, stats)
}

fn minimax(board: &Board, maximizing: bool, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;

    if let Some(value) = utility(board) {
        stats.leaves += 1;
        return value;
    }

    let children = successors(board).map(|(_, child)| minimax(&child, !maximizing, stats));

    let best = if maximizing {
        children.max()
    } else {
        children.min()
    };

    // A non-terminal board always has an empty cell, so `best` is set.
    best.unwrap_or(0)
}

/// Scores every legal action from `board`, in row-major order.
///
/// Each score is the value of the child board with the opponent to move.
/// Terminal boards have no actions and yield an empty list.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn ranked_actions(board: &Board) -> Vec<ScoredAction> {
    score_children(board).0
}

fn score_children(board: &Board) -> (Vec<ScoredAction>, SearchStats) {
    let mut total = SearchStats::default();

    if is_terminal(board) {
        return (Vec::new(), total);
    }

    let maximizer = next_player(board).is_maximizer();
    let mut scored = Vec::new();

    for (action, child) in successors(board) {
        let (score, stats) = search_value_with_stats(&child, !maximizer);
        trace!(%action, score, nodes = stats.nodes, "Scored child");
        total += stats;
        scored.push(ScoredAction { action, score });
    }

    (scored, total)
}

/// Picks the best entry of `ranked` for the player to move at `board`.
///
/// `ranked` is expected in row-major order, as returned by
/// [`ranked_actions`]. An entry replaces the current choice only when
/// strictly better for the mover, so ties keep the earliest action.
pub fn pick_best(board: &Board, ranked: &[ScoredAction]) -> Option<ScoredAction> {
    let maximizer = next_player(board).is_maximizer();
    let mut best_score = if maximizer { i32::MIN } else { i32::MAX };
    let mut best = None;

    for scored in ranked {
        let improves = if maximizer {
            scored.score > best_score
        } else {
            scored.score < best_score
        };
        if improves {
            best_score = scored.score;
            best = Some(*scored);
        }
    }

    best
}

/// Returns the optimal action for the player to move, or `None` if the
/// game is over.
///
/// Among equally valued actions the first in row-major order is kept.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn best_action(board: &Board) -> Option<Action> {
    if is_terminal(board) {
        debug!("Board is terminal, no action to take");
        return None;
    }

    let (scored, stats) = score_children(board);
    let best = pick_best(board, &scored);

    debug!(
        action = ?best.map(|s| s.action),
        score = ?best.map(|s| s.score),
        nodes = stats.nodes,
        leaves = stats.leaves,
        "Selected action"
    );
    best.map(|s| s.action)
}
