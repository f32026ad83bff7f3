//! Simulate command - AI-vs-AI series

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::{
    ai::Difficulty,
    app::{App, GameConfig},
    cli::output::{create_series_progress, percent, print_kv, print_section},
    ports::Strategy,
    session::{Scoreboard, Session},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Pit two AI tiers against each other")]
pub struct SimulateArgs {
    /// Difficulty playing X
    #[arg(long, default_value = "medium")]
    pub x: Difficulty,

    /// Difficulty playing O
    #[arg(long, default_value = "hard")]
    pub o: Difficulty,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: u32,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the tally as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Tally of a finished series
#[derive(Debug, Clone, Serialize)]
pub struct SeriesSummary {
    pub x: Difficulty,
    pub o: Difficulty,
    pub games: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl SeriesSummary {
    fn new(args: &SimulateArgs, scoreboard: &Scoreboard) -> Self {
        Self {
            x: args.x,
            o: args.o,
            games: scoreboard.total_games(),
            seed: args.seed,
            x_wins: scoreboard.x_wins,
            o_wins: scoreboard.o_wins,
            draws: scoreboard.draws,
        }
    }
}

/// Play `games` games between the two strategies, X always moving first.
pub fn run_series(
    x_strategy: &mut dyn Strategy,
    o_strategy: &mut dyn Strategy,
    games: u32,
    mut on_game: impl FnMut(&Scoreboard),
) -> crate::Result<Scoreboard> {
    let config = GameConfig::default().with_player_names(x_strategy.name(), o_strategy.name());
    let mut session = Session::new(config.clone());

    for game in 0..games {
        if game > 0 {
            session.reset(config.clone());
        }
        while session.is_active() {
            let mover = session.current_player();
            let position = match mover {
                Player::X => x_strategy.select_move(session.board(), mover)?,
                Player::O => o_strategy.select_move(session.board(), mover)?,
            };
            session.apply_move(mover, position)?;
        }
        on_game(session.scoreboard());
    }
    Ok(*session.scoreboard())
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let app = App::new();
    let mut x_strategy = app.create_strategy(args.x, args.seed);
    let mut o_strategy = app.create_strategy(args.o, args.seed.map(|seed| seed.wrapping_add(1)));

    print_section(&format!("{} (X) vs {} (O)", args.x, args.o));
    let pb = create_series_progress(u64::from(args.games))?;
    let scoreboard = run_series(x_strategy.as_mut(), o_strategy.as_mut(), args.games, |score| {
        pb.inc(1);
        pb.set_message(format!("X {} / O {} / draw {}", score.x_wins, score.o_wins, score.draws));
    })?;
    pb.finish_and_clear();

    let total = scoreboard.total_games();
    info!(total, x_wins = scoreboard.x_wins, o_wins = scoreboard.o_wins, "series finished");
    print_kv("Games", &total.to_string());
    print_kv(
        "X wins",
        &format!("{} ({})", scoreboard.x_wins, percent(scoreboard.x_wins, total)),
    );
    print_kv(
        "O wins",
        &format!("{} ({})", scoreboard.o_wins, percent(scoreboard.o_wins, total)),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", scoreboard.draws, percent(scoreboard.draws, total)),
    );

    if let Some(path) = &args.export {
        let summary = SeriesSummary::new(&args, &scoreboard);
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &summary)?;
        println!("\n✓ Results exported to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MinimaxStrategy, RandomStrategy};

    #[test]
    fn minimax_mirror_always_draws() {
        let mut x = MinimaxStrategy::new();
        let mut o = MinimaxStrategy::new();
        let score = run_series(&mut x, &mut o, 3, |_| {}).unwrap();
        assert_eq!(score.draws, 3);
    }

    #[test]
    fn minimax_never_loses_to_random() {
        let mut x = RandomStrategy::with_seed(11);
        let mut o = MinimaxStrategy::new();
        let mut seen = 0;
        let score = run_series(&mut x, &mut o, 20, |_| seen += 1).unwrap();
        assert_eq!(seen, 20);
        assert_eq!(score.total_games(), 20);
        assert_eq!(score.x_wins, 0);
    }

    #[test]
    fn summary_serializes_lowercase_tiers() {
        let args = SimulateArgs {
            x: Difficulty::Easy,
            o: Difficulty::Hard,
            games: 1,
            seed: None,
            export: None,
        };
        let scoreboard = Scoreboard {
            x_wins: 0,
            o_wins: 1,
            draws: 0,
        };
        let json = serde_json::to_value(SeriesSummary::new(&args, &scoreboard)).unwrap();
        assert_eq!(json["x"], "easy");
        assert_eq!(json["o_wins"], 1);
        assert!(json.get("seed").is_none());
    }
}
