//! noughts CLI - tic-tac-toe in the terminal
//!
//! - Play against a friend or the AI, with an optional turn timer
//! - Run AI-vs-AI series between difficulty tiers
//! - Inspect minimax scores for any position

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe with an AI opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(noughts::cli::commands::play::PlayArgs),

    /// Run an AI-vs-AI series
    Simulate(noughts::cli::commands::simulate::SimulateArgs),

    /// Score the legal moves of a position
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    // Quiet by default so logs do not interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Simulate(args) => noughts::cli::commands::simulate::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
    }
}
