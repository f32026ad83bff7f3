//! noughts: tic-tac-toe with an AI opponent
//!
//! This crate provides:
//! - Board model and rules engine (wins, draws, move legality)
//! - Three AI tiers: random, blocking, and exhaustive minimax
//! - A game session controller with undo, scoreboard and turn timer
//! - A terminal CLI built on top of the controller
//!
//! ```
//! use noughts::app::{GameConfig, GameMode};
//! use noughts::ai::Difficulty;
//! use noughts::session::GameController;
//!
//! let config = GameConfig::new(GameMode::SinglePlayer).with_difficulty(Difficulty::Hard);
//! let mut game = GameController::new(config)?;
//! game.apply_move(0)?;
//! // The hard AI answers a corner opening with the center.
//! assert_eq!(game.state().history.last().map(|mv| mv.position), Some(4));
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod ai;
pub mod app;
pub mod cli;
pub mod error;
pub mod ports;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
