//! Core types: words, randomness, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;
pub mod word;

pub use config::{TrainerConfig, DEFAULT_ROUNDS_AMOUNT, DEFAULT_STORAGE_KEY, MAX_MISTAKES};
pub use error::{EngineError, Result, SnapshotError};
pub use rng::{GameRng, Shuffle};
pub use word::Word;
