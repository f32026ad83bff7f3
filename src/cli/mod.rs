//! CLI infrastructure for the noughts terminal game
//!
//! This module provides the command-line interface for playing, running
//! AI-vs-AI series, and analyzing positions.

pub mod commands;
pub mod output;
