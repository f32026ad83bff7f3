//! Strategy port - abstraction for AI move selection
//!
//! Every difficulty tier implements this port:
//! - Uniform random play (easy)
//! - Opponent blocking with random fallback (medium)
//! - Exhaustive minimax (hard)

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Strategy trait - unified interface for AI opponents
///
/// The session controller only ever talks to this trait, so every tier goes
/// through the same move legality and evaluation path once a position has
/// been chosen.
///
/// # Examples
///
/// ```no_run
/// use noughts::{
///     ports::Strategy,
///     tictactoe::{Board, Player},
/// };
///
/// fn first_reply<S: Strategy>(strategy: &mut S) -> noughts::Result<usize> {
///     let mut board = Board::new();
///     board.place(0, Player::X)?;
///     strategy.select_move(&board, Player::O)
/// }
/// ```
pub trait Strategy: Send {
    /// Select a move for `player` on the given board.
    ///
    /// Returns the position (0-8) the strategy wants to mark.
    ///
    /// # Errors
    ///
    /// Returns `NoValidMoves` if the board has no empty cell.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize>;

    /// Get the strategy's name.
    ///
    /// Used in logs and simulation summaries.
    fn name(&self) -> &str;
}
