//! Analyze command - Minimax scores for every legal move of a position

use anyhow::Result;
use clap::Parser;

use crate::{
    ai::{DRAW_SCORE, evaluate_moves, minimax},
    cli::{
        commands::parse_player_token,
        output::{print_kv, print_section, render_board},
    },
    tictactoe::{Board, Cell, GameOutcome, Player, rules},
};

#[derive(Parser, Debug)]
#[command(about = "Score every legal move of a position with minimax")]
pub struct AnalyzeArgs {
    /// Board as 9 characters (`X`, `O`, `.`), row by row
    #[arg(default_value = ".........")]
    pub board: String,

    /// Player to move (`x` or `o`); inferred from the mark counts when omitted
    #[arg(long)]
    pub player: Option<String>,
}

/// X moves first, so X is to move whenever both have placed the same number of marks.
pub fn infer_mover(board: &Board) -> Player {
    let count = |cell: Cell| board.cells().iter().filter(|c| **c == cell).count();
    if count(Cell::X) > count(Cell::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Human-readable verdict for a minimax score
pub fn verdict(score: i32) -> &'static str {
    match score.cmp(&DRAW_SCORE) {
        std::cmp::Ordering::Less => "X wins",
        std::cmp::Ordering::Equal => "draw",
        std::cmp::Ordering::Greater => "O wins",
    }
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let mover = match &args.player {
        Some(token) => parse_player_token(token)?,
        None => infer_mover(&board),
    };

    print_section("Position");
    println!("{}", render_board(&board, rules::winning_line(&board)));

    if let Some(outcome) = rules::outcome(&board) {
        let text = match outcome {
            GameOutcome::Win(player) => format!("{player} has won"),
            GameOutcome::Draw => "draw".to_string(),
        };
        print_kv("Terminal", &text);
        return Ok(());
    }

    print_section(&format!("{mover} to move"));
    for (position, score) in evaluate_moves(&board, mover) {
        print_kv(&format!("move {position}"), &format!("{score:>3}  ({})", verdict(score)));
    }

    let best = minimax(&board, mover);
    if let Some(position) = best.position {
        println!();
        print_kv("Best move", &format!("{position} ({})", verdict(best.score)));
    }
    Ok(())
}
