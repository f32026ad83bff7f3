//! Blocking policy (medium tier)

use rand::{SeedableRng, random, rngs::StdRng};
use tracing::debug;

use super::random::RandomStrategy;
use crate::{
    Result,
    ports::Strategy,
    tictactoe::{Board, LineAnalyzer, Player},
};

/// Blocks the opponent's immediate win, otherwise plays randomly.
///
/// Lines are scanned in table order and the first threat found is blocked.
/// This does NOT try to win itself, only to block opponent wins.
pub struct BlockingStrategy {
    rng: StdRng,
}

impl BlockingStrategy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a blocking strategy with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Cell that stops the opponent of `player` from completing a line next turn
    pub fn find_block(board: &Board, player: Player) -> Option<usize> {
        LineAnalyzer::first_completing_cell(board.cells(), player.opponent())
    }
}

impl Default for BlockingStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for BlockingStrategy {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        if let Some(block) = Self::find_block(board, player) {
            debug!(position = block, %player, "blocking opponent line");
            return Ok(block);
        }
        RandomStrategy::pick(&mut self.rng, board)
    }

    fn name(&self) -> &str {
        "Blocking"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_top_row() {
        let board = Board::from_string("XX.......").unwrap();
        let mut strategy = BlockingStrategy::with_seed(3);
        assert_eq!(strategy.select_move(&board, Player::O).unwrap(), 2);
    }

    #[test]
    fn blocks_at_index_zero() {
        let board = Board::from_string(".XX.O....").unwrap();
        let mut strategy = BlockingStrategy::with_seed(3);
        assert_eq!(strategy.select_move(&board, Player::O).unwrap(), 0);
    }

    #[test]
    fn first_threat_in_table_order_wins() {
        // X threatens row 1 (needs 5), column 0 (needs 6) and the diagonal (needs 8).
        let board = Board::from_string("XO.XX....").unwrap();
        assert_eq!(BlockingStrategy::find_block(&board, Player::O), Some(5));
    }

    #[test]
    fn ignores_own_winning_line() {
        // O could win at 5 but the tier only looks at X's lines.
        let board = Board::from_string("X..OO.X..").unwrap();
        assert_eq!(BlockingStrategy::find_block(&board, Player::O), None);
    }

    #[test]
    fn falls_back_to_empty_cell() {
        let board = Board::from_string("X...O....").unwrap();
        let mut strategy = BlockingStrategy::with_seed(11);
        let mv = strategy.select_move(&board, Player::O).unwrap();
        assert!(board.is_empty(mv));
    }
}
