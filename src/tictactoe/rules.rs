//! Win, draw and legality checks

use super::{Board, GameOutcome, LineAnalyzer, Player, WinLine};

/// The player holding the first completed line in table order, if any
pub fn winner(board: &Board) -> Option<Player> {
    LineAnalyzer::first_completed_line(board.cells()).map(|(player, _)| player)
}

/// The combination [`winner`] matched, for highlighting
pub fn winning_line(board: &Board) -> Option<WinLine> {
    LineAnalyzer::first_completed_line(board.cells()).map(|(_, line)| line)
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

pub fn is_legal_move(board: &Board, index: usize) -> bool {
    board.is_empty(index)
}

/// Terminal outcome of the board, or `None` while the game continues
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if let Some(player) = winner(board) {
        Some(GameOutcome::Win(player))
    } else if board.is_full() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert_eq!(winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X
        // X O O
        // O X X
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(winner(&board), None);
        assert!(is_draw(&board));
        assert_eq!(outcome(&board), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let board = Board::from_string("XXXOOXXOO").unwrap();
        assert!(board.is_full());
        assert!(!is_draw(&board));
        assert_eq!(outcome(&board), Some(GameOutcome::Win(Player::X)));
    }

    #[test]
    fn test_in_progress() {
        let board = Board::from_string("X...O....").unwrap();
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_legal_moves() {
        let board = Board::from_string("X........").unwrap();
        assert!(!is_legal_move(&board, 0));
        assert!(is_legal_move(&board, 1));
        assert!(!is_legal_move(&board, 9));
    }
}
