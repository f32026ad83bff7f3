//! Play command - Interactive terminal game
//!
//! Reads one command per line from stdin while a one-second interval drives
//! the turn timer. The AI reply is delayed a little so it reads like a move
//! rather than an echo.

use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Parser;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    time,
};
use tracing::debug;

use crate::{
    ai::Difficulty,
    app::{App, DEFAULT_TIMER_SECS, GameConfig, GameMode},
    cli::output::render_board,
    ports::SessionObserver,
    session::{GameController, GameSnapshot, TimerEvent, TurnTimer},
    tictactoe::{GameOutcome, Move, Player, WinLine},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game in the terminal")]
pub struct PlayArgs {
    /// Game mode (two-player, single-player)
    #[arg(long)]
    pub mode: Option<GameMode>,

    /// AI difficulty for single-player games (easy, medium, hard)
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Display name for X
    #[arg(long)]
    pub player1: Option<String>,

    /// Display name for O (ignored in single-player)
    #[arg(long)]
    pub player2: Option<String>,

    /// Turn timer in seconds; `--timer` alone uses the default length
    #[arg(long, num_args = 0..=1, default_missing_value = "10")]
    pub timer: Option<u32>,

    /// Random seed for the AI
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the AI moves, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub ai_delay_ms: u64,

    /// JSON config file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl PlayArgs {
    /// Merge the config file (if any) with command-line overrides.
    pub fn to_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(name) = &self.player1 {
            config.player_x_name = name.clone();
        }
        if let Some(name) = &self.player2 {
            config.player_o_name = name.clone();
        }
        if let Some(secs) = self.timer {
            config.timer_secs = Some(secs);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        // The loop below schedules the AI reply itself so it can pause first.
        config.ai_auto_reply = false;
        config.validate()?;
        Ok(config)
    }
}

/// Prints session events as they happen.
struct TerminalObserver;

impl SessionObserver for TerminalObserver {
    fn on_move(&mut self, move_number: usize, mv: Move) -> crate::Result<()> {
        println!("{move_number}. {} on {}", mv.player, mv.position);
        Ok(())
    }

    fn on_undo(&mut self, mv: Move) -> crate::Result<()> {
        println!("Took back {} on {}", mv.player, mv.position);
        Ok(())
    }

    fn on_turn_timeout(&mut self, player: Player) -> crate::Result<()> {
        println!("Time's up for {player}!");
        Ok(())
    }

    fn on_game_end(&mut self, _outcome: GameOutcome, _line: Option<WinLine>) -> crate::Result<()> {
        println!("Game over. Press r for a new game or q to quit.");
        Ok(())
    }

    fn on_reset(&mut self) -> crate::Result<()> {
        println!("New game.");
        Ok(())
    }
}

enum Command {
    Move(usize),
    Undo,
    Reset,
    Score,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "u" | "undo" => Some(Command::Undo),
        "r" | "reset" | "new" => Some(Command::Reset),
        "s" | "score" => Some(Command::Score),
        "h" | "help" | "?" => Some(Command::Help),
        "q" | "quit" | "exit" => Some(Command::Quit),
        other => other.parse::<usize>().ok().map(Command::Move),
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.to_config()?;
    let ai_delay = Duration::from_millis(args.ai_delay_ms);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(config, ai_delay))
}

async fn run(config: GameConfig, ai_delay: Duration) -> Result<()> {
    let app = App::new();
    let mut controller = app.create_controller(config.clone())?;
    controller.add_observer(Box::new(TerminalObserver));

    print_help(config.timer_secs);
    render(&controller.state());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = time::interval(Duration::from_secs(1));
    let mut countdown = Countdown::default();
    countdown.rearm(controller.timer());
    ticker.reset();
    let timed = config.timer_secs.is_some();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let Some(command) = parse_command(&line) else {
                    println!("Unknown command '{}'. Type h for help.", line.trim());
                    continue;
                };
                match command {
                    Command::Quit => break,
                    Command::Help => print_help(config.timer_secs),
                    Command::Score => println!("{}", controller.state().score_text()),
                    Command::Move(index) => {
                        if report(controller.apply_move(index).map(|_| ()))? {
                            ai_turn(&mut controller, ai_delay).await?;
                        }
                    }
                    Command::Undo => {
                        if report(undo(&mut controller))? {
                            ai_turn(&mut controller, ai_delay).await?;
                        }
                    }
                    Command::Reset => {
                        controller.reset(config.clone())?;
                        countdown.disarm();
                    }
                }
                if countdown.rearm(controller.timer()) {
                    ticker.reset();
                }
                render(&controller.state());
            }
            _ = ticker.tick(), if timed => {
                let Some(generation) = countdown.generation() else { continue };
                match controller.tick_for(generation)? {
                    TimerEvent::Running { remaining } if remaining <= 3 => {
                        println!("{remaining}...");
                    }
                    TimerEvent::Expired => {
                        ai_turn(&mut controller, ai_delay).await?;
                        if countdown.rearm(controller.timer()) {
                            ticker.reset();
                        }
                        render(&controller.state());
                    }
                    _ => {}
                }
            }
        }
    }

    println!("{}", controller.state().score_text());
    Ok(())
}

/// Tracks which countdown the one-second interval is aligned to.
///
/// The interval is re-armed only when a new countdown starts, so commands
/// that leave the turn alone (score, help, rejected moves) cannot hold the
/// timer back.
#[derive(Debug, Default)]
struct Countdown {
    armed: Option<u64>,
}

impl Countdown {
    /// Follow the controller's timer. Returns true when a new countdown has
    /// started and the interval should be re-armed.
    fn rearm(&mut self, timer: Option<&TurnTimer>) -> bool {
        let current = timer
            .filter(|timer| timer.is_running())
            .map(TurnTimer::generation);
        let changed = current != self.armed;
        self.armed = current;
        changed && current.is_some()
    }

    /// Forget the armed countdown; a rebuilt timer may reuse its generation.
    fn disarm(&mut self) {
        self.armed = None;
    }

    fn generation(&self) -> Option<u64> {
        self.armed
    }
}

/// Print recoverable rejections and keep going; anything else is fatal.
fn report(result: crate::Result<()>) -> Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(err) if err.is_invalid_move() => {
            println!("Not allowed: {err}");
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

/// Undo back to a human turn.
///
/// In single-player mode the AI reply is taken back along with the human move
/// it answered.
fn undo(controller: &mut GameController) -> crate::Result<()> {
    controller.undo_last_move()?;
    if controller.ai_to_move() {
        match controller.undo_last_move() {
            Ok(_) | Err(crate::Error::NothingToUndo) => {}
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

async fn ai_turn(controller: &mut GameController, delay: Duration) -> Result<()> {
    if !controller.ai_to_move() {
        return Ok(());
    }
    render(&controller.state());
    debug!(?delay, strategy = controller.strategy_name(), "AI thinking");
    time::sleep(delay).await;
    controller.play_ai_turn()?;
    Ok(())
}

fn render(state: &GameSnapshot) {
    println!();
    println!("{}", render_board(&state.board, state.winning_line));
    match state.result_text() {
        Some(result) => println!("{result}"),
        None => println!("{}", state.turn_text()),
    }
}

fn print_help(timer_secs: Option<u32>) {
    println!("Commands: 0-8 place a mark, u undo, r new game, s score, q quit");
    if let Some(secs) = timer_secs {
        println!("Each turn lasts {secs}s; an expired turn passes to the opponent.");
    } else {
        println!("Turn timer off (enable with --timer, default {DEFAULT_TIMER_SECS}s).");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> PlayArgs {
        PlayArgs {
            mode: None,
            difficulty: None,
            player1: None,
            player2: None,
            timer: None,
            seed: None,
            ai_delay_ms: 0,
            config: None,
        }
    }

    #[test]
    fn flags_override_defaults() {
        let config = PlayArgs {
            mode: Some(GameMode::SinglePlayer),
            difficulty: Some(Difficulty::Hard),
            player1: Some("Ada".to_string()),
            timer: Some(5),
            ..args()
        }
        .to_config()
        .unwrap();

        assert_eq!(config.mode, GameMode::SinglePlayer);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.player_x_name(), "Ada");
        assert_eq!(config.timer_secs, Some(5));
        assert!(!config.ai_auto_reply);
    }

    #[test]
    fn zero_timer_flag_rejected() {
        let result = PlayArgs {
            timer: Some(0),
            ..args()
        }
        .to_config();
        assert!(result.is_err());
    }

    #[test]
    fn commands_parse() {
        assert!(matches!(parse_command(" 4 "), Some(Command::Move(4))));
        assert!(matches!(parse_command("U"), Some(Command::Undo)));
        assert!(matches!(parse_command("q"), Some(Command::Quit)));
        assert!(parse_command("xyz").is_none());
    }

    #[test]
    fn undo_returns_turn_to_human() {
        let config = GameConfig::new(GameMode::SinglePlayer)
            .with_difficulty(Difficulty::Hard)
            .with_ai_auto_reply(true);
        let mut controller = GameController::new(config).unwrap();
        controller.apply_move(0).unwrap();
        assert_eq!(controller.session().history().len(), 2);

        undo(&mut controller).unwrap();
        assert!(controller.session().history().is_empty());
        assert_eq!(controller.session().current_player(), Player::X);
    }

    #[test]
    fn invalid_moves_are_reported_not_fatal() {
        assert!(!report(Err(crate::Error::InvalidMove { position: 3 })).unwrap());
        assert!(report(Err(crate::Error::NoValidMoves)).is_err());
    }

    #[test]
    fn countdown_rearms_only_for_a_new_turn() {
        let config = GameConfig::new(GameMode::TwoPlayer).with_timer(5);
        let mut controller = GameController::new(config.clone()).unwrap();
        let mut countdown = Countdown::default();
        assert!(countdown.rearm(controller.timer()));
        let first = countdown.generation();

        // Ticks, score/help and rejected moves keep the same countdown.
        controller.tick().unwrap();
        assert!(!countdown.rearm(controller.timer()));
        assert!(!report(controller.apply_move(9).map(|_| ())).unwrap());
        assert!(!countdown.rearm(controller.timer()));
        assert_eq!(countdown.generation(), first);

        controller.apply_move(4).unwrap();
        assert!(countdown.rearm(controller.timer()));
        assert_ne!(countdown.generation(), first);

        controller.reset(config).unwrap();
        countdown.disarm();
        assert!(countdown.rearm(controller.timer()));
    }

    #[test]
    fn countdown_expires_despite_other_commands() {
        let config = GameConfig::new(GameMode::TwoPlayer).with_timer(2);
        let mut controller = GameController::new(config).unwrap();
        let mut countdown = Countdown::default();
        countdown.rearm(controller.timer());

        let generation = countdown.generation().unwrap();
        assert_eq!(
            controller.tick_for(generation).unwrap(),
            TimerEvent::Running { remaining: 1 }
        );
        assert!(report(controller.apply_move(42).map(|_| ())).is_ok());
        assert!(!countdown.rearm(controller.timer()));
        assert_eq!(controller.tick_for(generation).unwrap(), TimerEvent::Expired);
        assert_eq!(controller.session().current_player(), Player::O);
        assert!(countdown.rearm(controller.timer()));
    }

    #[test]
    fn countdown_idle_after_game_ends() {
        let config = GameConfig::new(GameMode::TwoPlayer).with_timer(5);
        let mut controller = GameController::new(config).unwrap();
        let mut countdown = Countdown::default();
        for index in [0, 3, 1, 4, 2] {
            controller.apply_move(index).unwrap();
            countdown.rearm(controller.timer());
        }
        assert!(!controller.session().is_active());
        assert_eq!(countdown.generation(), None);
    }
}
