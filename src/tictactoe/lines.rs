//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// A winning combination: three board indices
pub type WinLine = [usize; 3];

/// Winning line indices on the 3x3 board, in tie-break order
pub const WINNING_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        Self::completed_line(cells, player).is_some()
    }

    /// First line (table order) fully held by `player`
    pub fn completed_line(cells: &[Cell; 9], player: Player) -> Option<WinLine> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .copied()
            .find(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// First line (table order) fully held by either player
    pub fn first_completed_line(cells: &[Cell; 9]) -> Option<(Player, WinLine)> {
        WINNING_LINES.iter().find_map(|&line| {
            let owner = cells[line[0]].player()?;
            line.iter()
                .all(|&idx| cells[idx] == cells[line[0]])
                .then_some((owner, line))
        })
    }

    /// First empty cell (table order) that would complete a line for `player`
    pub fn first_completing_cell(cells: &[Cell; 9], player: Player) -> Option<usize> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::completing_cell(cells, player, line))
    }

    /// The empty cell of `line` when `player` holds the other two, if any
    pub fn completing_cell(cells: &[Cell; 9], player: Player, line: &WinLine) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_from(s: &str) -> [Cell; 9] {
        *crate::tictactoe::Board::from_string(s).unwrap().cells()
    }

    #[test]
    fn test_has_won_horizontal() {
        let cells = cells_from("XXX......");
        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let cells = cells_from("O..O..O..");
        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert_eq!(LineAnalyzer::completed_line(&cells, Player::O), Some([0, 3, 6]));
    }

    #[test]
    fn test_has_won_diagonal() {
        let cells = cells_from("..X.X.X..");
        assert_eq!(LineAnalyzer::completed_line(&cells, Player::X), Some([2, 4, 6]));
    }

    #[test]
    fn test_first_completed_line_uses_table_order() {
        // Row 0 and column 0 both complete; the row comes first.
        let cells = cells_from("XXXX..X..");
        assert_eq!(
            LineAnalyzer::first_completed_line(&cells),
            Some((Player::X, [0, 1, 2]))
        );
    }

    #[test]
    fn test_completing_cell() {
        let cells = cells_from("X.X......");
        assert_eq!(LineAnalyzer::completing_cell(&cells, Player::X, &[0, 1, 2]), Some(1));
        assert_eq!(LineAnalyzer::completing_cell(&cells, Player::O, &[0, 1, 2]), None);
    }

    #[test]
    fn test_completing_cell_blocked_line() {
        let cells = cells_from("XOX......");
        assert_eq!(LineAnalyzer::completing_cell(&cells, Player::X, &[0, 1, 2]), None);
    }

    #[test]
    fn test_first_completing_cell_index_zero() {
        // Column 0 needs index 0; it is still a valid answer.
        let cells = cells_from("...X..X..");
        assert_eq!(LineAnalyzer::first_completing_cell(&cells, Player::X), Some(0));
    }
}
