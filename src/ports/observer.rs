//! Observer port - state-change notifications for presentation shells
//!
//! The controller calls these hooks after each state transition so a shell can
//! render marks, turn text, scores, highlights and the move log without
//! polling.

use crate::{
    Result,
    tictactoe::{GameOutcome, Move, Player, WinLine},
};

/// Observer trait for monitoring a game session
///
/// # Event Sequence
///
/// 1. `on_reset()` - Whenever a fresh game starts
/// 2. For each applied move:
///    - `on_move(move_number, mv)`
///    - `on_turn_change(next)` if the game continues, or
///      `on_game_end(outcome, winning_line)` if it ended
/// 3. `on_undo(mv)` followed by `on_turn_change(player)` when a move is undone
/// 4. `on_turn_timeout(expired)` followed by `on_turn_change(next)` when the
///    turn timer runs out
///
/// An error returned from a hook is logged by the controller and otherwise
/// ignored; it does not undo the transition or stop later observers.
///
/// # Examples
///
/// ```no_run
/// use noughts::{ports::SessionObserver, tictactoe::GameOutcome, tictactoe::WinLine};
///
/// struct EndCounter {
///     games: usize,
/// }
///
/// impl SessionObserver for EndCounter {
///     fn on_game_end(
///         &mut self,
///         _outcome: GameOutcome,
///         _line: Option<WinLine>,
///     ) -> noughts::Result<()> {
///         self.games += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait SessionObserver: Send {
    /// Called after a move was placed.
    ///
    /// `move_number` is 1-based, matching the move log.
    fn on_move(&mut self, _move_number: usize, _mv: Move) -> Result<()> {
        Ok(())
    }

    /// Called after the last move was taken back.
    fn on_undo(&mut self, _mv: Move) -> Result<()> {
        Ok(())
    }

    /// Called whenever the mover changes while the game is active.
    fn on_turn_change(&mut self, _player: Player) -> Result<()> {
        Ok(())
    }

    /// Called when the turn timer expired for `player`.
    fn on_turn_timeout(&mut self, _player: Player) -> Result<()> {
        Ok(())
    }

    /// Called once when the game reaches a terminal state.
    fn on_game_end(&mut self, _outcome: GameOutcome, _line: Option<WinLine>) -> Result<()> {
        Ok(())
    }

    /// Called after the session was reset for a new game.
    fn on_reset(&mut self) -> Result<()> {
        Ok(())
    }
}
