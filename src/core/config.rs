//! Trainer configuration.
//!
//! Hosts build a `TrainerConfig` with the `with_*` methods or load one from
//! JSON. Missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

/// Words per game when the host does not say otherwise.
pub const DEFAULT_ROUNDS_AMOUNT: usize = 6;

/// Mistakes allowed on a word before its round fails.
pub const MAX_MISTAKES: u32 = 3;

/// Storage key of the persisted game snapshot.
pub const DEFAULT_STORAGE_KEY: &str = "spelling-trainer/game";

/// Complete trainer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Number of words drawn from the word bank for one game.
    pub rounds_amount: usize,

    /// Mistakes that fail a round.
    pub max_mistakes: u32,

    /// 1-based round the engine starts at.
    pub start_round: usize,

    /// Key the snapshot is stored under.
    pub storage_key: String,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            rounds_amount: DEFAULT_ROUNDS_AMOUNT,
            max_mistakes: MAX_MISTAKES,
            start_round: 1,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed: None,
        }
    }
}

impl TrainerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rounds_amount(mut self, amount: usize) -> Self {
        self.rounds_amount = amount;
        self
    }

    #[must_use]
    pub fn with_max_mistakes(mut self, max: u32) -> Self {
        self.max_mistakes = max;
        self
    }

    #[must_use]
    pub fn with_start_round(mut self, round: usize) -> Self {
        self.start_round = round;
        self
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrainerConfig::default();
        assert_eq!(config.rounds_amount, 6);
        assert_eq!(config.max_mistakes, 3);
        assert_eq!(config.start_round, 1);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = TrainerConfig::new()
            .with_rounds_amount(10)
            .with_max_mistakes(5)
            .with_start_round(2)
            .with_storage_key("custom")
            .with_seed(42);

        assert_eq!(config.rounds_amount, 10);
        assert_eq!(config.max_mistakes, 5);
        assert_eq!(config.start_round, 2);
        assert_eq!(config.storage_key, "custom");
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TrainerConfig = serde_json::from_str(r#"{"rounds_amount": 4, "seed": 9}"#).unwrap();
        assert_eq!(config.rounds_amount, 4);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_mistakes, MAX_MISTAKES);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }
}
