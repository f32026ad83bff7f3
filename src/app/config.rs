//! Configuration types for game sessions.

use std::{fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ai::Difficulty, tictactoe::Player};

pub const DEFAULT_PLAYER_X_NAME: &str = "Player 1";
pub const DEFAULT_PLAYER_O_NAME: &str = "Player 2";
pub const AI_PLAYER_NAME: &str = "AI";
/// Turn length used when the timer is switched on without a duration
pub const DEFAULT_TIMER_SECS: u32 = 10;

/// Who controls O
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board
    #[default]
    TwoPlayer,
    /// A human plays X against the AI as O
    SinglePlayer,
}

impl GameMode {
    /// The player controlled by the AI in this mode
    pub fn ai_player(self) -> Option<Player> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::SinglePlayer => Some(Player::O),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameMode::TwoPlayer => "two-player",
            GameMode::SinglePlayer => "single-player",
        };
        f.write_str(label)
    }
}

impl FromStr for GameMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two-player" | "two_player" | "2p" | "pvp" => Ok(GameMode::TwoPlayer),
            "single-player" | "single_player" | "1p" | "ai" => Ok(GameMode::SinglePlayer),
            _ => Err(crate::Error::ParseGameMode {
                input: s.to_string(),
                expected: "two-player, single-player".to_string(),
            }),
        }
    }
}

/// Configuration applied on every session reset.
///
/// # Examples
///
/// ```
/// use noughts::app::{GameConfig, GameMode};
/// use noughts::ai::Difficulty;
///
/// let config = GameConfig::new(GameMode::SinglePlayer)
///     .with_difficulty(Difficulty::Hard)
///     .with_player_names("Ada", "ignored in single-player")
///     .with_timer(15)
///     .with_seed(42);
/// assert_eq!(config.player_o_name(), "AI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub player_x_name: String,
    pub player_o_name: String,
    /// Turn length in seconds; `None` disables the turn timer
    pub timer_secs: Option<u32>,
    /// Seed for the random AI tiers
    pub seed: Option<u64>,
    /// Whether the controller answers a human move with the AI reply immediately
    pub ai_auto_reply: bool,
}

impl GameConfig {
    /// Create a configuration for `mode` with default names, easy AI and no timer.
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            difficulty: Difficulty::default(),
            player_x_name: DEFAULT_PLAYER_X_NAME.to_string(),
            player_o_name: DEFAULT_PLAYER_O_NAME.to_string(),
            timer_secs: None,
            seed: None,
            ai_auto_reply: true,
        }
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn from_json_file(path: &Path) -> crate::Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set display names. Blank names fall back to the defaults.
    pub fn with_player_names(mut self, x_name: &str, o_name: &str) -> Self {
        self.player_x_name = x_name.to_string();
        self.player_o_name = o_name.to_string();
        self
    }

    /// Enable the turn timer with the given length in seconds.
    pub fn with_timer(mut self, secs: u32) -> Self {
        self.timer_secs = Some(secs);
        self
    }

    pub fn without_timer(mut self) -> Self {
        self.timer_secs = None;
        self
    }

    /// Set the random seed for deterministic AI behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_ai_auto_reply(mut self, enabled: bool) -> Self {
        self.ai_auto_reply = enabled;
        self
    }

    /// Check values that cannot be defaulted away.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for a zero-second timer.
    pub fn validate(&self) -> crate::Result<()> {
        if self.timer_secs == Some(0) {
            return Err(crate::Error::InvalidConfiguration {
                message: "timer duration must be at least one second".to_string(),
            });
        }
        Ok(())
    }

    pub fn player_x_name(&self) -> &str {
        non_blank(&self.player_x_name).unwrap_or(DEFAULT_PLAYER_X_NAME)
    }

    /// O's display name; always "AI" in single-player mode.
    pub fn player_o_name(&self) -> &str {
        match self.mode {
            GameMode::SinglePlayer => AI_PLAYER_NAME,
            GameMode::TwoPlayer => non_blank(&self.player_o_name).unwrap_or(DEFAULT_PLAYER_O_NAME),
        }
    }

    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::X => self.player_x_name(),
            Player::O => self.player_o_name(),
        }
    }

    pub fn is_ai(&self, player: Player) -> bool {
        self.mode.ai_player() == Some(player)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

fn non_blank(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_two_player_game() {
        let config = GameConfig::default();
        assert_eq!(config.mode, GameMode::TwoPlayer);
        assert_eq!(config.player_x_name(), "Player 1");
        assert_eq!(config.player_o_name(), "Player 2");
        assert_eq!(config.timer_secs, None);
        assert!(config.ai_auto_reply);
    }

    #[test]
    fn blank_names_fall_back() {
        let config = GameConfig::default().with_player_names("  ", "");
        assert_eq!(config.name_of(Player::X), "Player 1");
        assert_eq!(config.name_of(Player::O), "Player 2");
    }

    #[test]
    fn single_player_names_ai() {
        let config = GameConfig::new(GameMode::SinglePlayer).with_player_names("Ada", "Bob");
        assert_eq!(config.name_of(Player::X), "Ada");
        assert_eq!(config.name_of(Player::O), "AI");
        assert!(config.is_ai(Player::O));
        assert!(!config.is_ai(Player::X));
    }

    #[test]
    fn zero_timer_rejected() {
        let config = GameConfig::default().with_timer(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn mode_parses() {
        assert_eq!("single-player".parse::<GameMode>().unwrap(), GameMode::SinglePlayer);
        assert_eq!("2P".parse::<GameMode>().unwrap(), GameMode::TwoPlayer);
        assert!("hotseat".parse::<GameMode>().is_err());
    }

    #[test]
    fn json_uses_kebab_case_modes() {
        let json = r#"{"mode":"single-player","difficulty":"hard"}"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mode, GameMode::SinglePlayer);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.player_x_name(), "Player 1");
    }
}
