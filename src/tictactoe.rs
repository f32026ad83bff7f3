//! Tic-Tac-Toe board model and rules

pub mod board;
pub mod game;
pub mod lines;
pub mod rules;

pub use board::{Board, CELL_COUNT, Cell, Player};
pub use game::{GameOutcome, Move, MoveHistory};
pub use lines::{LineAnalyzer, WINNING_LINES, WinLine};
