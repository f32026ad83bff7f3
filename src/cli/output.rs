//! Output formatting and progress bars for CLI

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, Cell, WinLine};

/// Create a progress bar for a series of games
pub fn create_series_progress(total_games: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{key}:"), value);
}

/// Render the grid with index hints in empty cells and brackets around a
/// winning line.
///
/// ```text
///  X | 1 | O
/// ---+---+---
///  3 | X | 5
/// ---+---+---
///  O | 7 | X
/// ```
pub fn render_board(board: &Board, winning_line: Option<WinLine>) -> String {
    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let cells: Vec<String> = (row * 3..row * 3 + 3)
            .map(|index| {
                let mark = match board.get(index) {
                    Some(Cell::Empty) | None => index.to_string(),
                    Some(cell) => cell.to_char().to_string(),
                };
                if winning_line.is_some_and(|line| line.contains(&index)) {
                    format!("[{mark}]")
                } else {
                    format!(" {mark} ")
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

/// Format a share of `total` as a percentage
pub fn percent(count: u32, total: u32) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", f64::from(count) * 100.0 / f64::from(total))
}
