//! Live game configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::search::SearchConfig;

/// Tiles in a double-six set with and without the blank suit.
const FULL_SET: usize = 28;
const NO_BLANKS_SET: usize = 21;

/// Table setup: set composition, deal, who opens, and search settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tiles dealt to each side.
    pub hand_size: usize,

    /// Include the blank suit (`[0|x]` tiles).
    /// `false` plays with the 21 tiles from `[1|1]` to `[6|6]`.
    pub include_blanks: bool,

    /// Shuffle seed. Same seed produces the same deal.
    pub seed: u64,

    /// Computer makes the first move.
    pub computer_starts: bool,

    /// Computer search settings.
    pub search: SearchConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            include_blanks: true,
            seed: 42,
            computer_starts: false,
            search: SearchConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    pub fn with_blanks(mut self, include_blanks: bool) -> Self {
        self.include_blanks = include_blanks;
        self
    }

    pub fn with_computer_first(mut self, computer_starts: bool) -> Self {
        self.computer_starts = computer_starts;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Number of tiles in the configured set.
    #[must_use]
    pub fn set_size(&self) -> usize {
        if self.include_blanks {
            FULL_SET
        } else {
            NO_BLANKS_SET
        }
    }

    /// Both hands must be non-empty and fit in the set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let set_size = self.set_size();
        if self.hand_size == 0 || self.hand_size * 2 > set_size {
            return Err(ConfigError::InvalidHandSize {
                hand_size: self.hand_size,
                set_size,
            });
        }
        Ok(())
    }
}
