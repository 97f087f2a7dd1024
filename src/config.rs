use crate::error::ErrorKind;
use crate::strategy::BotKind;

/// Enough cards for every pocket plus the board and three burns.
pub const MAX_PLAYERS: usize = 22;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("big blind must be positive")]
    ZeroBigBlind,
    #[error("small blind {small} exceeds big blind {big}")]
    SmallAboveBig { small: u64, big: u64 },
    #[error("starting stack must be positive")]
    ZeroStack,
    #[error("player count {count} outside 2..={max}")]
    PlayerCount { count: usize, max: usize },
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

/// Table settings for one match.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct GameConfig {
    pub starting_stack: u64,
    pub small_blind: u64,
    pub big_blind: u64,
    pub max_players: usize,
    /// Seeds deck shuffles and bot randomness; `None` draws from the OS.
    pub seed: Option<u64>,
    pub bot_kind: BotKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_stack: 800,
            small_blind: 5,
            big_blind: 10,
            max_players: MAX_PLAYERS,
            seed: None,
            bot_kind: BotKind::default(),
        }
    }
}

impl GameConfig {
    pub fn with_stack(mut self, stack: u64) -> Self {
        self.starting_stack = stack;
        self
    }

    pub fn with_blinds(mut self, small: u64, big: u64) -> Self {
        self.small_blind = small;
        self.big_blind = big;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_bot_kind(mut self, kind: BotKind) -> Self {
        self.bot_kind = kind;
        self
    }

    /// Check the settings for a table of `player_count` seats.
    ///
    /// ```
    /// use holdem_rs::config::GameConfig;
    ///
    /// let cfg = GameConfig::default();
    /// assert!(cfg.validate(6).is_ok());
    /// assert!(cfg.validate(1).is_err());
    /// assert!(cfg.clone().with_blinds(20, 10).validate(6).is_err());
    /// ```
    pub fn validate(&self, player_count: usize) -> Result<(), ConfigError> {
        if self.big_blind == 0 {
            return Err(ConfigError::ZeroBigBlind);
        }
        if self.small_blind > self.big_blind {
            return Err(ConfigError::SmallAboveBig { small: self.small_blind, big: self.big_blind });
        }
        if self.starting_stack == 0 {
            return Err(ConfigError::ZeroStack);
        }
        let max = self.max_players.min(MAX_PLAYERS);
        if !(2..=max).contains(&player_count) {
            return Err(ConfigError::PlayerCount { count: player_count, max });
        }
        Ok(())
    }
}
