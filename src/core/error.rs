//! Error taxonomy for the trainer.
//!
//! - `EngineError::InvalidRound`: construction with a start round outside the word list.
//! - `EngineError::OutOfRange`: a round query or navigation outside the determined rounds.
//! - `EngineError::InvalidSnapshot`: persisted state that cannot be adopted.
//!
//! Every mutating operation validates first, so an error never leaves the
//! engine half-updated.

use thiserror::Error;

/// Errors surfaced by the round engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Start round is 0 or exceeds the number of words.
    #[error("start round {round} is outside 1..={rounds_amount}")]
    InvalidRound { round: usize, rounds_amount: usize },

    /// Round query or navigation target outside the allowed range.
    #[error("round {round} is outside 1..={max_round}")]
    OutOfRange { round: usize, max_round: usize },

    /// The engine needs at least one word.
    #[error("word list is empty")]
    EmptyWordList,

    /// A word is empty or contains something other than letters.
    #[error("word `{0}` must be a non-empty string of letters")]
    InvalidWord(String),

    /// Persisted state is malformed or inconsistent.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(#[from] SnapshotError),
}

/// Reasons a persisted snapshot is rejected.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Wrong shape, wrong field types, negative counters.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("snapshot has no words")]
    EmptyWords,

    #[error("snapshot word `{0}` is not a non-empty string of letters")]
    InvalidWord(String),

    #[error("snapshot round {round} is outside 1..={rounds_amount}")]
    RoundOutOfRange { round: usize, rounds_amount: usize },

    /// A word after the current round already has mistakes.
    #[error("round {round} has not been played but has {mistakes} mistakes")]
    UnplayedMistakes { round: usize, mistakes: u32 },

    /// `currentLetters` is not a permutation of the unplaced part of the word.
    #[error("letters `{letters}` do not match the remaining letters of `{word}`")]
    LettersMismatch { letters: String, word: String },
}

/// Convenience alias used across the crate.
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
