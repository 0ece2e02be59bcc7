//! End-of-game statistics.

use serde::Serialize;

use crate::core::Word;

/// Shown in place of a word when nobody made a mistake.
pub const NO_RESULT: &str = "no result";

/// Summary of a finished (or in-progress) game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameStats {
    /// Words spelled with zero mistakes.
    pub words_without_mistakes: usize,
    /// Sum of every word's mistakes.
    pub total_mistakes: u32,
    /// Word with the most mistakes; `None` when `total_mistakes == 0`.
    pub word_with_most_mistakes: Option<String>,
}

impl GameStats {
    /// Compute statistics over a word list.
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        Self {
            words_without_mistakes: words_without_mistakes(words),
            total_mistakes: total_mistakes(words),
            word_with_most_mistakes: word_with_most_mistakes(words).map(str::to_string),
        }
    }

    /// Word with most mistakes, or the `"no result"` sentinel.
    #[must_use]
    pub fn most_mistakes_label(&self) -> &str {
        self.word_with_most_mistakes.as_deref().unwrap_or(NO_RESULT)
    }
}

pub(crate) fn words_without_mistakes(words: &[Word]) -> usize {
    words.iter().filter(|w| w.mistake_count() == 0).count()
}

/// Saturates at `u32::MAX` instead of overflowing.
pub(crate) fn total_mistakes(words: &[Word]) -> u32 {
    words
        .iter()
        .map(Word::mistake_count)
        .fold(0u32, u32::saturating_add)
}

/// First word (in list order) reaching the highest mistake count.
pub(crate) fn word_with_most_mistakes(words: &[Word]) -> Option<&str> {
    let mut best: Option<&Word> = None;
    for word in words {
        if word.mistake_count() > best.map_or(0, Word::mistake_count) {
            best = Some(word);
        }
    }
    best.map(Word::text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(entries: &[(&str, u32)]) -> Vec<Word> {
        entries
            .iter()
            .map(|(text, mistakes)| Word::with_mistakes(*text, *mistakes).unwrap())
            .collect()
    }

    #[test]
    fn test_no_mistakes() {
        let stats = GameStats::from_words(&words(&[("cat", 0), ("dog", 0)]));
        assert_eq!(stats.words_without_mistakes, 2);
        assert_eq!(stats.total_mistakes, 0);
        assert_eq!(stats.word_with_most_mistakes, None);
        assert_eq!(stats.most_mistakes_label(), "no result");
    }

    #[test]
    fn test_mixed() {
        let stats = GameStats::from_words(&words(&[("cat", 1), ("dog", 3), ("owl", 0)]));
        assert_eq!(stats.words_without_mistakes, 1);
        assert_eq!(stats.total_mistakes, 4);
        assert_eq!(stats.most_mistakes_label(), "dog");
    }

    #[test]
    fn test_total_saturates() {
        let list = words(&[("cat", 4_000_000_000), ("dog", 4_000_000_000)]);
        assert_eq!(total_mistakes(&list), u32::MAX);
        assert_eq!(GameStats::from_words(&list).most_mistakes_label(), "cat");
    }

    #[test]
    fn test_tie_breaks_on_first() {
        let list = words(&[("owl", 0), ("cat", 2), ("dog", 2)]);
        assert_eq!(word_with_most_mistakes(&list), Some("cat"));
    }
}
