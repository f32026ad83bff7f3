//! Session state machine: board, history, mover, phase and scoreboard

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    ai::Difficulty,
    app::{GameConfig, GameMode},
    tictactoe::{Board, GameOutcome, Move, MoveHistory, Player, WinLine, rules},
};

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the current player to move
    AwaitingMove,
    /// A move was placed and is being scored; never visible between calls
    Evaluating,
    /// Won or drawn; only a reset starts a new game
    Ended,
}

/// Win/draw tally that survives resets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// `"<x>: n | Draw: n | <o>: n"`
    pub fn summary(&self, x_name: &str, o_name: &str) -> String {
        format!(
            "{x_name}: {} | Draw: {} | {o_name}: {}",
            self.x_wins, self.draws, self.o_wins
        )
    }
}

/// Result of applying one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on with `next` to move
    Continue { next: Player },
    /// The move ended the game
    Ended {
        outcome: GameOutcome,
        line: Option<WinLine>,
    },
}

/// One game's mutable state plus the scoreboard carried across games.
///
/// Every rejected operation returns an error from the invalid-move family and
/// leaves the session exactly as it was.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    history: MoveHistory,
    current_player: Player,
    phase: Phase,
    outcome: Option<GameOutcome>,
    winning_line: Option<WinLine>,
    scoreboard: Scoreboard,
    config: GameConfig,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Session {
            board: Board::new(),
            history: MoveHistory::new(),
            current_player: Player::X,
            phase: Phase::AwaitingMove,
            outcome: None,
            winning_line: None,
            scoreboard: Scoreboard::default(),
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Ended
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    fn ensure_awaiting(&self) -> Result<()> {
        match self.phase {
            Phase::AwaitingMove => Ok(()),
            Phase::Evaluating | Phase::Ended => Err(crate::Error::GameOver),
        }
    }

    /// Place `player`'s mark at `index` and score the result.
    ///
    /// # Errors
    ///
    /// `GameOver` outside AwaitingMove, `NotYourTurn` for the wrong player,
    /// `InvalidPosition`/`InvalidMove` for illegal cells.
    pub fn apply_move(&mut self, player: Player, index: usize) -> Result<MoveOutcome> {
        self.ensure_awaiting()?;
        if player != self.current_player {
            return Err(crate::Error::NotYourTurn { player });
        }

        self.board.place(index, player)?;
        let mv = Move::new(player, index);
        self.history.push(mv);
        self.phase = Phase::Evaluating;
        debug!(move_number = self.history.len(), %player, position = index, "move applied");

        Ok(self.evaluate(player))
    }

    fn evaluate(&mut self, mover: Player) -> MoveOutcome {
        if let Some(winner) = rules::winner(&self.board) {
            let line = rules::winning_line(&self.board);
            return self.finish(GameOutcome::Win(winner), line);
        }
        if rules::is_draw(&self.board) {
            return self.finish(GameOutcome::Draw, None);
        }

        self.current_player = mover.opponent();
        self.phase = Phase::AwaitingMove;
        MoveOutcome::Continue {
            next: self.current_player,
        }
    }

    fn finish(&mut self, outcome: GameOutcome, line: Option<WinLine>) -> MoveOutcome {
        self.scoreboard.record(outcome);
        self.outcome = Some(outcome);
        self.winning_line = line;
        self.phase = Phase::Ended;
        info!(?outcome, ?line, moves = self.history.len(), "game over");
        MoveOutcome::Ended { outcome, line }
    }

    /// Take back the last move; its player becomes the mover again.
    ///
    /// # Errors
    ///
    /// `NothingToUndo` on an empty history, `GameOver` once the game has ended.
    pub fn undo_last_move(&mut self) -> Result<Move> {
        self.ensure_awaiting()?;
        let mv = self.history.pop().ok_or(crate::Error::NothingToUndo)?;
        self.board.clear(mv.position);
        self.current_player = mv.player;
        debug!(player = %mv.player, position = mv.position, "move undone");
        Ok(mv)
    }

    /// Hand the turn to the opponent without placing a mark.
    ///
    /// Used when the turn timer runs out. Returns the new mover.
    ///
    /// # Errors
    ///
    /// `GameOver` outside AwaitingMove.
    pub fn pass_turn(&mut self) -> Result<Player> {
        self.ensure_awaiting()?;
        self.current_player = self.current_player.opponent();
        debug!(next = %self.current_player, "turn passed");
        Ok(self.current_player)
    }

    /// Start a new game under `config`, keeping the scoreboard.
    pub fn reset(&mut self, config: GameConfig) {
        self.board = Board::new();
        self.history.clear();
        self.current_player = Player::X;
        self.phase = Phase::AwaitingMove;
        self.outcome = None;
        self.winning_line = None;
        self.config = config;
        info!(mode = %self.config.mode, difficulty = %self.config.difficulty, "session reset");
    }

    /// Read-only view for presentation shells
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            current_player: self.current_player,
            active: self.is_active(),
            phase: self.phase,
            outcome: self.outcome,
            winning_line: self.winning_line,
            scoreboard: self.scoreboard,
            history: self.history.clone(),
            mode: self.config.mode,
            difficulty: self.config.difficulty,
            player_x_name: self.config.player_x_name().to_string(),
            player_o_name: self.config.player_o_name().to_string(),
        }
    }
}

/// Everything a shell needs to render the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_player: Player,
    pub active: bool,
    pub phase: Phase,
    pub outcome: Option<GameOutcome>,
    pub winning_line: Option<WinLine>,
    pub scoreboard: Scoreboard,
    pub history: MoveHistory,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub player_x_name: String,
    pub player_o_name: String,
}

impl GameSnapshot {
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_name,
            Player::O => &self.player_o_name,
        }
    }

    /// `"<name>'s Turn"`
    pub fn turn_text(&self) -> String {
        format!("{}'s Turn", self.name_of(self.current_player))
    }

    /// `"<name> Wins!"` or `"Draw!"` once the game has ended
    pub fn result_text(&self) -> Option<String> {
        self.outcome.map(|outcome| match outcome {
            GameOutcome::Win(player) => format!("{} Wins!", self.name_of(player)),
            GameOutcome::Draw => "Draw!".to_string(),
        })
    }

    pub fn score_text(&self) -> String {
        self.scoreboard.summary(&self.player_x_name, &self.player_o_name)
    }

    /// Move log entries in the form `"1. X on 4"`
    pub fn move_log(&self) -> Vec<String> {
        self.history.log_entries()
    }
}
