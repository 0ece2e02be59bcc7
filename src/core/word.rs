//! A word to spell and the mistakes made on it.

use serde::Serialize;

use super::error::{EngineError, Result};

/// One word of the game.
///
/// The text is validated on construction: non-empty and letters only.
/// Lengths and indices are counted in `char`s, not bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Word {
    text: String,
    len: usize,
    mistake_count: u32,
}

impl Word {
    /// Create a word with zero mistakes.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Self::with_mistakes(text, 0)
    }

    /// Create a word carrying an existing mistake count (used when restoring).
    pub fn with_mistakes(text: impl Into<String>, mistake_count: u32) -> Result<Self> {
        let text = text.into();
        if !is_valid_text(&text) {
            return Err(EngineError::InvalidWord(text));
        }

        Ok(Self::from_valid(text, mistake_count))
    }

    /// Build from text already checked with `is_valid_text`.
    pub(crate) fn from_valid(text: String, mistake_count: u32) -> Self {
        Self {
            len: text.chars().count(),
            text,
            mistake_count,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: empty words are rejected on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn mistake_count(&self) -> u32 {
        self.mistake_count
    }

    /// Letter at a 0-based position.
    #[must_use]
    pub fn letter_at(&self, index: usize) -> Option<char> {
        self.text.chars().nth(index)
    }

    /// Letters in order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// Letters from `index` to the end.
    pub fn letters_from(&self, index: usize) -> impl Iterator<Item = char> + '_ {
        self.text.chars().skip(index)
    }

    pub(crate) fn record_mistake(&mut self) {
        self.mistake_count = self.mistake_count.saturating_add(1);
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// True for non-empty strings made only of letters.
pub(crate) fn is_valid_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_word() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.len(), 3);
        assert_eq!(word.mistake_count(), 0);
        assert_eq!(word.letter_at(1), Some('a'));
        assert_eq!(word.letter_at(3), None);
        assert_eq!(format!("{}", word), "cat");
    }

    #[test]
    fn test_rejects_invalid_text() {
        assert!(matches!(Word::new(""), Err(EngineError::InvalidWord(_))));
        assert!(matches!(Word::new("two words"), Err(EngineError::InvalidWord(_))));
        assert!(matches!(Word::new("r2d2"), Err(EngineError::InvalidWord(_))));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let word = Word::new("café").unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(word.letter_at(3), Some('é'));
    }

    #[test]
    fn test_letters_from() {
        let word = Word::new("apple").unwrap();
        let rest: String = word.letters_from(2).collect();
        assert_eq!(rest, "ple");
    }

    #[test]
    fn test_record_mistake() {
        let mut word = Word::with_mistakes("dog", 2).unwrap();
        word.record_mistake();
        assert_eq!(word.mistake_count(), 3);
    }
}
