//! Application layer: game configuration and the dependency container.
//!
//! ```text
//!   shell (cli)  ──►  App  ──►  GameController  ──►  Session
//!                      │              │
//!                      │              └──► Strategy (ports) ◄── ai
//!                      └──► GameConfig
//! ```
//!
//! # Usage
//!
//! ```
//! use noughts::ai::Difficulty;
//! use noughts::app::{App, GameConfig, GameMode};
//!
//! let app = App::for_testing().with_default_seed(42).build();
//! let config = GameConfig::new(GameMode::SinglePlayer).with_difficulty(Difficulty::Medium);
//! let controller = app.create_controller(config)?;
//! assert!(controller.state().active);
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::{
    AI_PLAYER_NAME, DEFAULT_PLAYER_O_NAME, DEFAULT_PLAYER_X_NAME, DEFAULT_TIMER_SECS, GameConfig,
    GameMode,
};
pub use container::{App, AppBuilder};
