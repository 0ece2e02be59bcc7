//! The round engine: letter submission, round advancement, statistics and
//! snapshot persistence.
//!
//! ## Key Types
//!
//! - `RoundEngine`: owns the words and the active round's letter pool
//! - `RoundView`: read-only state for rendering
//! - `GameStats`: end-of-game summary

pub mod round;
pub mod stats;
pub mod view;

pub use round::{validate_saved_game, RoundEngine};
pub use stats::{GameStats, NO_RESULT};
pub use view::RoundView;
