//! Game session controller
//!
//! [`Session`] is the state machine for one game plus the scoreboard that
//! outlives it. [`GameController`] layers the AI opponent, the turn timer and
//! observer notifications on top of it.

pub mod controller;
pub mod observers;
pub mod state;
pub mod timer;

pub use controller::GameController;
pub use observers::{EventLog, TracingObserver};
pub use state::{GameSnapshot, MoveOutcome, Phase, Scoreboard, Session};
pub use timer::{TimerEvent, TurnTimer};
