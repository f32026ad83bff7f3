//! AI opponents, one strategy per difficulty tier
//!
//! - [`RandomStrategy`]: uniform choice among empty cells (easy)
//! - [`BlockingStrategy`]: blocks the opponent's immediate win, else random (medium)
//! - [`MinimaxStrategy`]: exhaustive undiscounted minimax (hard)

pub mod blocking;
pub mod minimax;
pub mod random;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use blocking::BlockingStrategy;
pub use minimax::{
    DRAW_SCORE, MinimaxStrategy, O_WIN_SCORE, ScoredMove, X_WIN_SCORE, evaluate_moves, minimax,
};
pub use random::RandomStrategy;

use crate::ports::Strategy;

/// AI skill tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(label)
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "random" => Ok(Difficulty::Easy),
            "medium" | "blocking" | "defensive" => Ok(Difficulty::Medium),
            "hard" | "minimax" | "optimal" => Ok(Difficulty::Hard),
            _ => Err(crate::Error::ParseDifficulty {
                input: s.to_string(),
                expected: "easy, medium, hard".to_string(),
            }),
        }
    }
}

/// Build the strategy for a difficulty tier.
///
/// `seed` makes the random tiers reproducible; `None` seeds from entropy.
pub fn strategy_for(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn Strategy> {
    match (difficulty, seed) {
        (Difficulty::Easy, Some(seed)) => Box::new(RandomStrategy::with_seed(seed)),
        (Difficulty::Easy, None) => Box::new(RandomStrategy::new()),
        (Difficulty::Medium, Some(seed)) => Box::new(BlockingStrategy::with_seed(seed)),
        (Difficulty::Medium, None) => Box::new(BlockingStrategy::new()),
        (Difficulty::Hard, _) => Box::new(MinimaxStrategy::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_aliases() {
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("defensive".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn strategy_names_follow_tier() {
        assert_eq!(strategy_for(Difficulty::Easy, Some(1)).name(), "Random");
        assert_eq!(strategy_for(Difficulty::Medium, Some(1)).name(), "Blocking");
        assert_eq!(strategy_for(Difficulty::Hard, None).name(), "Minimax");
    }
}
