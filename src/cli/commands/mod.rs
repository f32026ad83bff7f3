//! Subcommands of the `noughts` binary

pub mod analyze;
pub mod play;
pub mod simulate;

use crate::tictactoe::Player;

/// Parse `x`/`o` (and a few synonyms) into a player.
pub(crate) fn parse_player_token(value: &str) -> crate::Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "0" | "second" | "player2" | "p2" => Ok(Player::O),
        _ => Err(crate::Error::ParsePlayer {
            input: value.to_string(),
        }),
    }
}
