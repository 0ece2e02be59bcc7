//! # spelling-trainer
//!
//! Core of a single-player word-spelling trainer: the player rebuilds each
//! word by picking its scrambled letters in order, with a bounded number of
//! mistakes per word, over a fixed sequence of rounds.
//!
//! ## Design Principles
//!
//! 1. **Owned engine, no globals**: hosts hold a `RoundEngine` (or a
//!    `Trainer`) and drive it with commands.
//!
//! 2. **Commands and queries**: state changes only through
//!    `submit_letter` / `advance_round` / `load`; everything else is a
//!    read-only query or a `RoundView` snapshot.
//!
//! 3. **Seams, not I/O**: scrambling goes through `Shuffle`, persistence
//!    through `PersistenceAdapter`. The engine never touches a clock, a
//!    file or a screen.
//!
//! ## Modules
//!
//! - `core`: words, RNG, configuration, errors
//! - `engine`: round state machine, view, statistics
//! - `persistence`: key/value seam and the stored snapshot format
//! - `words`: picking a game's words from a bank
//! - `trainer`: host-side flow (auto-save, resume, key presses, restart)

pub mod core;
pub mod engine;
pub mod persistence;
pub mod trainer;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    EngineError, GameRng, Result, Shuffle, SnapshotError, TrainerConfig, Word,
    DEFAULT_ROUNDS_AMOUNT, DEFAULT_STORAGE_KEY, MAX_MISTAKES,
};

pub use crate::engine::{validate_saved_game, GameStats, RoundEngine, RoundView, NO_RESULT};

pub use crate::persistence::{MemoryStore, PersistenceAdapter, Snapshot, SnapshotWord};

pub use crate::trainer::{LetterOutcome, Trainer};

pub use crate::words::select_words;
