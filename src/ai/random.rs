//! Uniform random play

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    ports::Strategy,
    tictactoe::{Board, Player},
};

/// Random policy (easy tier)
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random strategy with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick uniformly among the board's empty cells
    pub(crate) fn pick(rng: &mut StdRng, board: &Board) -> Result<usize> {
        let moves = board.empty_indices();
        if moves.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        let index = rng.random_range(0..moves.len());
        Ok(moves[index])
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, board: &Board, _player: Player) -> Result<usize> {
        Self::pick(&mut self.rng, board)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
