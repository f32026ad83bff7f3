//! Exhaustive minimax (hard tier)
//!
//! The search walks the full game tree from the given position with no
//! pruning, no transposition cache and no depth limit; a 3x3 tree is small
//! enough that every line ends in a win or a full board. Scores are not
//! discounted by depth, so a quick win and a slow win are worth the same.

use tracing::debug;

use crate::{
    Result,
    ports::Strategy,
    tictactoe::{Board, LineAnalyzer, Player},
};

/// Leaf score when X (the minimizer) holds a line
pub const X_WIN_SCORE: i32 = -10;
/// Leaf score when O (the maximizer) holds a line
pub const O_WIN_SCORE: i32 = 10;
/// Leaf score for a full board without a line
pub const DRAW_SCORE: i32 = 0;

/// Result of a search: the chosen move (absent on terminal boards) and its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Option<usize>,
    pub score: i32,
}

fn leaf_score(board: &Board) -> Option<i32> {
    if LineAnalyzer::has_won(board.cells(), Player::X) {
        Some(X_WIN_SCORE)
    } else if LineAnalyzer::has_won(board.cells(), Player::O) {
        Some(O_WIN_SCORE)
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

fn improves(mover: Player, candidate: i32, best: i32) -> bool {
    match mover {
        Player::O => candidate > best,
        Player::X => candidate < best,
    }
}

fn worst_score(mover: Player) -> i32 {
    match mover {
        Player::O => i32::MIN,
        Player::X => i32::MAX,
    }
}

/// Value of `board` with `mover` to play, searching in place.
fn search(board: &mut Board, mover: Player) -> i32 {
    if let Some(score) = leaf_score(board) {
        return score;
    }

    let mut best = worst_score(mover);
    for pos in board.empty_indices() {
        if board.place(pos, mover).is_err() {
            continue;
        }
        let value = search(board, mover.opponent());
        board.clear(pos);

        if improves(mover, value, best) {
            best = value;
        }
    }
    best
}

/// Best move for `mover` and its minimax value.
///
/// Candidates are tried in ascending index order and only a strictly better
/// score replaces the current choice, so ties go to the lowest index.
pub fn minimax(board: &Board, mover: Player) -> ScoredMove {
    let mut scratch = *board;
    if let Some(score) = leaf_score(&scratch) {
        return ScoredMove {
            position: None,
            score,
        };
    }

    let mut best = ScoredMove {
        position: None,
        score: worst_score(mover),
    };
    for (pos, value) in evaluate_in_place(&mut scratch, mover) {
        if improves(mover, value, best.score) {
            best = ScoredMove {
                position: Some(pos),
                score: value,
            };
        }
    }
    best
}

/// Minimax value of every legal move for `mover`, in ascending index order.
pub fn evaluate_moves(board: &Board, mover: Player) -> Vec<(usize, i32)> {
    let mut scratch = *board;
    if leaf_score(&scratch).is_some() {
        return Vec::new();
    }
    evaluate_in_place(&mut scratch, mover)
}

fn evaluate_in_place(board: &mut Board, mover: Player) -> Vec<(usize, i32)> {
    let mut moves_with_values = Vec::new();
    for pos in board.empty_indices() {
        if board.place(pos, mover).is_err() {
            continue;
        }
        let value = search(board, mover.opponent());
        board.clear(pos);
        moves_with_values.push((pos, value));
    }
    moves_with_values
}

/// Optimal policy (minimax)
#[derive(Debug, Default, Clone)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for MinimaxStrategy {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        let best = minimax(board, player);
        debug!(?best.position, best.score, %player, "minimax selection");
        best.position.ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
