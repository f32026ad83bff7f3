//! Ready-made session observers

use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

use crate::{
    Result,
    ports::SessionObserver,
    tictactoe::{GameOutcome, Move, Player, WinLine},
};

/// Logs every session event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl SessionObserver for TracingObserver {
    fn on_move(&mut self, move_number: usize, mv: Move) -> Result<()> {
        info!(move_number, player = %mv.player, position = mv.position, "move");
        Ok(())
    }

    fn on_undo(&mut self, mv: Move) -> Result<()> {
        info!(player = %mv.player, position = mv.position, "undo");
        Ok(())
    }

    fn on_turn_timeout(&mut self, player: Player) -> Result<()> {
        info!(%player, "turn timed out");
        Ok(())
    }

    fn on_game_end(&mut self, outcome: GameOutcome, line: Option<WinLine>) -> Result<()> {
        info!(?outcome, ?line, "game ended");
        Ok(())
    }

    fn on_reset(&mut self) -> Result<()> {
        info!("new game");
        Ok(())
    }
}

/// Records every event as a line of text.
///
/// Clones share one log, so a shell can hand a clone to the controller and
/// read the events back through another clone.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Arc<Mutex<Vec<String>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, event: String) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl SessionObserver for EventLog {
    fn on_move(&mut self, move_number: usize, mv: Move) -> Result<()> {
        self.push(format!("{move_number}. {} on {}", mv.player, mv.position));
        Ok(())
    }

    fn on_undo(&mut self, mv: Move) -> Result<()> {
        self.push(format!("undo {} on {}", mv.player, mv.position));
        Ok(())
    }

    fn on_turn_change(&mut self, player: Player) -> Result<()> {
        self.push(format!("turn {player}"));
        Ok(())
    }

    fn on_turn_timeout(&mut self, player: Player) -> Result<()> {
        self.push(format!("timeout {player}"));
        Ok(())
    }

    fn on_game_end(&mut self, outcome: GameOutcome, _line: Option<WinLine>) -> Result<()> {
        let text = match outcome {
            GameOutcome::Win(player) => format!("win {player}"),
            GameOutcome::Draw => "draw".to_string(),
        };
        self.push(text);
        Ok(())
    }

    fn on_reset(&mut self) -> Result<()> {
        self.push("reset".to_string());
        Ok(())
    }
}
