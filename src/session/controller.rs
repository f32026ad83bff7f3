//! Turn sequencing between humans, the AI strategy and the turn timer.

use tracing::{debug, info, warn};

use super::{
    state::{GameSnapshot, MoveOutcome, Session},
    timer::{TimerEvent, TurnTimer},
};
use crate::{
    Result, ai,
    app::GameConfig,
    ports::{SessionObserver, Strategy},
    tictactoe::{Move, Player},
};

/// Owns a [`Session`] and drives it on behalf of a presentation shell.
///
/// Moves requested through [`GameController::apply_move`] are always made by a
/// human. In single-player mode the AI's reply goes through the same
/// [`Session::apply_move`] path, so it obeys the same legality and scoring
/// rules. Every transition that changes the mover or ends the game cancels the
/// turn timer and restarts it only if a human is still to move.
///
/// Observers hear about a transition only after it is complete. An observer
/// error is logged and never undoes or interrupts the game.
pub struct GameController {
    session: Session,
    strategy: Box<dyn Strategy>,
    timer: Option<TurnTimer>,
    observers: Vec<Box<dyn SessionObserver>>,
    /// Seed for reset configs that carry none
    default_seed: Option<u64>,
}

impl GameController {
    /// Create a controller with the strategy matching `config.difficulty`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the config fails validation.
    pub fn new(config: GameConfig) -> Result<Self> {
        let strategy = ai::strategy_for(config.difficulty, config.seed);
        Self::with_strategy(config, strategy)
    }

    /// Create a controller with an explicit AI strategy.
    ///
    /// The strategy is replaced on the next [`GameController::reset`].
    pub fn with_strategy(config: GameConfig, strategy: Box<dyn Strategy>) -> Result<Self> {
        config.validate()?;
        let timer = config.timer_secs.map(TurnTimer::new);
        let mut controller = Self {
            default_seed: config.seed,
            session: Session::new(config),
            strategy,
            timer,
            observers: Vec::new(),
        };
        controller.sync_timer();
        Ok(controller)
    }

    /// Seed applied by [`GameController::reset`] when the new config has none.
    ///
    /// Defaults to the seed of the config the controller was created with.
    pub fn set_default_seed(&mut self, seed: Option<u64>) {
        self.default_seed = seed;
    }

    pub fn add_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn timer(&self) -> Option<&TurnTimer> {
        self.timer.as_ref()
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn state(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    /// True when the game is active and the AI is the mover.
    pub fn ai_to_move(&self) -> bool {
        self.session.is_active() && self.session.config().is_ai(self.session.current_player())
    }

    /// Apply a human move for the current player at `index`.
    ///
    /// With auto-reply enabled, the AI answers before this returns and the
    /// outcome describes the position after its reply.
    ///
    /// # Errors
    ///
    /// `NotYourTurn` when the AI is to move, plus everything
    /// [`Session::apply_move`] rejects. Rejections leave the game unchanged.
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome> {
        let player = self.session.current_player();
        if self.ai_to_move() {
            debug!(position = index, "human move rejected during AI turn");
            return Err(crate::Error::NotYourTurn {
                player: player.opponent(),
            });
        }

        let outcome = self.apply_for(player, index)?;
        if self.session.config().ai_auto_reply && self.ai_to_move() {
            return self.play_ai_turn();
        }
        Ok(outcome)
    }

    /// Let the AI choose and apply its move.
    ///
    /// # Errors
    ///
    /// `GameOver` when the game has ended, `NotYourTurn` when a human is to move.
    pub fn play_ai_turn(&mut self) -> Result<MoveOutcome> {
        if !self.session.is_active() {
            return Err(crate::Error::GameOver);
        }
        let player = self.session.current_player();
        if !self.session.config().is_ai(player) {
            return Err(crate::Error::NotYourTurn {
                player: player.opponent(),
            });
        }

        let position = self.strategy.select_move(self.session.board(), player)?;
        debug!(strategy = self.strategy.name(), %player, position, "AI move selected");
        self.apply_for(player, position)
    }

    fn apply_for(&mut self, player: Player, index: usize) -> Result<MoveOutcome> {
        let outcome = self.session.apply_move(player, index)?;
        self.sync_timer();

        let move_number = self.session.history().len();
        let mv = Move::new(player, index);
        self.notify("move", |observer| observer.on_move(move_number, mv));
        match outcome {
            MoveOutcome::Continue { next } => {
                self.notify("turn_change", |observer| observer.on_turn_change(next))
            }
            MoveOutcome::Ended { outcome, line } => {
                self.notify("game_end", |observer| observer.on_game_end(outcome, line))
            }
        }
        Ok(outcome)
    }

    /// Take back the last move.
    ///
    /// Only one move is undone, even in single-player mode; a shell that wants
    /// to return the turn to the human calls this again.
    ///
    /// # Errors
    ///
    /// `NothingToUndo` on an empty history, `GameOver` after the game ended.
    pub fn undo_last_move(&mut self) -> Result<Move> {
        let mv = self.session.undo_last_move()?;
        self.sync_timer();

        let mover = self.session.current_player();
        self.notify("undo", |observer| observer.on_undo(mv));
        self.notify("turn_change", |observer| observer.on_turn_change(mover));
        Ok(mv)
    }

    /// Start a new game under `config`. The scoreboard is kept.
    ///
    /// A config without a seed takes the controller's default seed, so a
    /// seeded controller stays reproducible across games.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the config fails validation; the
    /// current game is left untouched in that case.
    pub fn reset(&mut self, mut config: GameConfig) -> Result<()> {
        config.validate()?;
        if config.seed.is_none() {
            config.seed = self.default_seed;
        }
        self.strategy = ai::strategy_for(config.difficulty, config.seed);
        self.timer = config.timer_secs.map(TurnTimer::new);
        self.session.reset(config);
        self.sync_timer();

        let mover = self.session.current_player();
        self.notify("reset", |observer| observer.on_reset());
        self.notify("turn_change", |observer| observer.on_turn_change(mover));
        Ok(())
    }

    /// Deliver one second of turn time.
    ///
    /// On expiry the turn passes to the opponent as if the mover had passed;
    /// in single-player mode with auto-reply the AI then moves at once.
    pub fn tick(&mut self) -> Result<TimerEvent> {
        let event = match self.timer.as_mut() {
            Some(timer) if self.session.is_active() => timer.tick(),
            _ => TimerEvent::Idle,
        };
        if event == TimerEvent::Expired {
            self.expire_turn()?;
        }
        Ok(event)
    }

    /// Like [`GameController::tick`], ignoring ticks for an older countdown.
    pub fn tick_for(&mut self, generation: u64) -> Result<TimerEvent> {
        let event = match self.timer.as_mut() {
            Some(timer) if self.session.is_active() => timer.tick_for(generation),
            _ => TimerEvent::Idle,
        };
        if event == TimerEvent::Expired {
            self.expire_turn()?;
        }
        Ok(event)
    }

    fn expire_turn(&mut self) -> Result<()> {
        let expired = self.session.current_player();
        let next = self.session.pass_turn()?;
        info!(%expired, %next, "turn timer expired");
        self.sync_timer();

        self.notify("turn_timeout", |observer| observer.on_turn_timeout(expired));
        self.notify("turn_change", |observer| observer.on_turn_change(next));

        if self.session.config().ai_auto_reply && self.ai_to_move() {
            self.play_ai_turn()?;
        }
        Ok(())
    }

    fn sync_timer(&mut self) {
        let human_to_move = self.session.is_active() && !self.ai_to_move();
        if let Some(timer) = self.timer.as_mut() {
            timer.cancel();
            if human_to_move {
                timer.start();
            }
        }
    }

    fn notify<F>(&mut self, event: &str, mut deliver: F)
    where
        F: FnMut(&mut dyn SessionObserver) -> Result<()>,
    {
        for observer in &mut self.observers {
            if let Err(err) = deliver(observer.as_mut()) {
                warn!(event, error = %err, "session observer failed");
            }
        }
    }
}
