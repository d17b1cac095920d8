use std::env::var;

use color_eyre::eyre::{eyre, Result, WrapErr};
use uno_hand::constants::DEFAULT_CARDS_PER_PLAYER;

const DEFAULT_PLAYERS: &str = "A,B,C,D";
const DEFAULT_MAX_TURNS: usize = 1000;

/// Settings for an autoplayed hand, read from `UNO_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub players: Vec<String>,
    pub seed: Option<u64>,
    pub cards_per_player: usize,
    pub max_turns: usize,
}

impl AutoplayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let players = lookup("UNO_PLAYERS")
            .unwrap_or_else(|| DEFAULT_PLAYERS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect::<Vec<_>>();
        if players.is_empty() {
            return Err(eyre!("`UNO_PLAYERS` does not name any player"));
        }

        let seed = lookup("UNO_SEED")
            .map(|seed| seed.parse().wrap_err("`UNO_SEED` must be an unsigned integer"))
            .transpose()?;

        let cards_per_player = match lookup("UNO_CARDS_PER_PLAYER") {
            Some(count) => count
                .parse()
                .wrap_err("`UNO_CARDS_PER_PLAYER` must be an unsigned integer")?,
            None => DEFAULT_CARDS_PER_PLAYER,
        };

        let max_turns = match lookup("UNO_MAX_TURNS") {
            Some(turns) => turns
                .parse()
                .wrap_err("`UNO_MAX_TURNS` must be an unsigned integer")?,
            None => DEFAULT_MAX_TURNS,
        };

        Ok(Self {
            players,
            seed,
            cards_per_player,
            max_turns,
        })
    }
}
