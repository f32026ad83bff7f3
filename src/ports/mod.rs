//! Ports (trait boundaries) between the game core and its collaborators.
//!
//! The session controller owns these traits; AI tiers and presentation
//! shells implement them.

pub mod observer;
pub mod strategy;

pub use observer::SessionObserver;
pub use strategy::Strategy;
