//! Persisted snapshot format.
//!
//! The stored value is JSON and must stay readable across versions:
//!
//! ```json
//! {
//!   "words": [{ "text": "cat", "mistakeAmount": 0 }],
//!   "round": 1,
//!   "currentLetters": "ta"
//! }
//! ```
//!
//! `currentLetters` holds the letters not yet placed, in their scrambled
//! order. Progress through the word is derived from its length.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::word::{is_valid_text, Word};
use crate::core::SnapshotError;

/// Serialized word entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotWord {
    pub text: String,
    pub mistake_amount: u32,
}

/// Serialized engine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub words: Vec<SnapshotWord>,
    pub round: usize,
    pub current_letters: String,
}

/// A validated snapshot, ready to be adopted by an engine.
#[derive(Clone, Debug)]
pub(crate) struct Restored {
    pub words: Vec<Word>,
    pub round: usize,
    pub letter_index: usize,
    pub pool: SmallVec<[char; 16]>,
}

impl Snapshot {
    /// Parse a stored value.
    pub fn from_json(value: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(value)?)
    }

    /// Serialize for storage.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check every field and build the state an engine adopts.
    pub(crate) fn restore(self) -> Result<Restored, SnapshotError> {
        if self.words.is_empty() {
            return Err(SnapshotError::EmptyWords);
        }

        let rounds_amount = self.words.len();
        if self.round == 0 || self.round > rounds_amount {
            return Err(SnapshotError::RoundOutOfRange {
                round: self.round,
                rounds_amount,
            });
        }

        let mut words = Vec::with_capacity(rounds_amount);
        for (index, entry) in self.words.into_iter().enumerate() {
            if !is_valid_text(&entry.text) {
                return Err(SnapshotError::InvalidWord(entry.text));
            }
            if index + 1 > self.round && entry.mistake_amount > 0 {
                return Err(SnapshotError::UnplayedMistakes {
                    round: index + 1,
                    mistakes: entry.mistake_amount,
                });
            }
            words.push(Word::from_valid(entry.text, entry.mistake_amount));
        }

        let current = &words[self.round - 1];
        let pool: SmallVec<[char; 16]> = self.current_letters.chars().collect();

        if pool.len() > current.len() {
            return Err(SnapshotError::LettersMismatch {
                letters: self.current_letters,
                word: current.text().to_string(),
            });
        }

        let letter_index = current.len() - pool.len();
        let mut expected: Vec<char> = current.letters_from(letter_index).collect();
        let mut actual: Vec<char> = pool.to_vec();
        expected.sort_unstable();
        actual.sort_unstable();

        if expected != actual {
            return Err(SnapshotError::LettersMismatch {
                letters: self.current_letters,
                word: current.text().to_string(),
            });
        }

        Ok(Restored {
            words,
            round: self.round,
            letter_index,
            pool,
        })
    }
}
