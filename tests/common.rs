//! Common test utilities for the noughts test suite.

#![allow(dead_code)]

use noughts::{
    app::{GameConfig, GameMode},
    ai::Difficulty,
    session::GameController,
    tictactoe::Board,
};

/// Parse a board literal, panicking on malformed input.
pub fn board(s: &str) -> Board {
    Board::from_string(s).expect("valid board literal")
}

/// Single-player config with a fixed seed.
pub fn vs_ai(difficulty: Difficulty) -> GameConfig {
    GameConfig::new(GameMode::SinglePlayer)
        .with_difficulty(difficulty)
        .with_seed(2024)
}

/// Apply each index as a human move.
pub fn play(controller: &mut GameController, moves: &[usize]) {
    for &index in moves {
        controller
            .apply_move(index)
            .unwrap_or_else(|err| panic!("move {index} rejected: {err}"));
    }
}
