//! Round/letter state machine.
//!
//! ## Lifecycle
//!
//! 1. Construct from an ordered word list; the start round's letters are scrambled.
//! 2. `submit_letter` until `is_round_completed` (spelled, or failed after
//!    `max_mistakes` mistakes).
//! 3. `advance_round`; after the last round the game is finished.
//! 4. Read `stats` for the summary.
//!
//! `save`/`load` move the whole game through a `PersistenceAdapter` at any
//! point before the game finishes.
//!
//! ```
//! use spelling_trainer::{GameRng, RoundEngine, TrainerConfig};
//!
//! let mut engine = RoundEngine::with_shuffler(["cat"], &TrainerConfig::default(), GameRng::new(1)).unwrap();
//!
//! for letter in ['c', 'a', 't'] {
//!     let index = engine.pool_index_of(letter).unwrap();
//!     assert!(engine.submit_letter(index));
//! }
//! assert!(engine.is_round_completed());
//!
//! engine.advance_round();
//! assert!(engine.is_finished());
//! assert_eq!(engine.total_mistakes(), 0);
//! ```

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{EngineError, GameRng, Result, Shuffle, SnapshotError, TrainerConfig, Word};
use crate::persistence::{PersistenceAdapter, Snapshot, SnapshotWord};

use super::stats::{self, GameStats};
use super::view::RoundView;

type LetterPool = SmallVec<[char; 16]>;

/// Tracks progress through a list of words.
///
/// Rounds are 1-based. While the game runs, `1 <= round <= rounds_amount`;
/// once finished, `round == rounds_amount + 1`.
#[derive(Clone, Debug)]
pub struct RoundEngine<S: Shuffle = GameRng> {
    words: Vec<Word>,
    round: usize,
    /// Letters of the current word already placed, in order.
    letter_index: usize,
    /// Remaining letters of the current word, scrambled.
    pool: LetterPool,
    finished: bool,
    max_mistakes: u32,
    storage_key: String,
    shuffler: S,
}

impl RoundEngine<GameRng> {
    /// Create an engine with default configuration and an entropy-seeded RNG.
    pub fn new<I, W>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self::with_config(words, &TrainerConfig::default())
    }

    /// Create an engine from a configuration.
    ///
    /// Letters are scrambled with the `"letters"` stream of the configured
    /// seed, or an entropy-seeded RNG when no seed is set.
    pub fn with_config<I, W>(words: I, config: &TrainerConfig) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_shuffler(words, config, rng.for_context("letters"))
    }
}

impl<S: Shuffle> RoundEngine<S> {
    /// Create an engine scrambling letters with `shuffler`.
    ///
    /// ## Errors
    ///
    /// - `EmptyWordList` when `words` is empty
    /// - `InvalidWord` when a word is empty or not made of letters
    /// - `InvalidRound` when `config.start_round` is 0 or exceeds the word count
    pub fn with_shuffler<I, W>(words: I, config: &TrainerConfig, shuffler: S) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Word::new)
            .collect::<Result<Vec<_>>>()?;

        if words.is_empty() {
            return Err(EngineError::EmptyWordList);
        }

        let rounds_amount = words.len();
        let round = config.start_round;
        if round == 0 || round > rounds_amount {
            return Err(EngineError::InvalidRound { round, rounds_amount });
        }

        let mut engine = Self {
            words,
            round,
            letter_index: 0,
            pool: LetterPool::new(),
            finished: false,
            max_mistakes: config.max_mistakes.max(1),
            storage_key: config.storage_key.clone(),
            shuffler,
        };
        engine.scramble_current();

        debug!(rounds_amount, round, "round engine created");
        Ok(engine)
    }

    // === Queries ===

    /// Number of rounds (words).
    #[must_use]
    pub fn rounds_amount(&self) -> usize {
        self.words.len()
    }

    /// Current 1-based round; `rounds_amount() + 1` once finished.
    #[must_use]
    pub fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn max_mistakes(&self) -> u32 {
        self.max_mistakes
    }

    /// All words in round order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word of the active round. `None` once finished.
    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        if self.finished {
            return None;
        }
        self.words.get(self.round - 1)
    }

    /// Letters of the current word already placed.
    #[must_use]
    pub fn letter_index(&self) -> usize {
        self.letter_index
    }

    /// Remaining letters of the current word, in scrambled order.
    #[must_use]
    pub fn scrambled_letters(&self) -> &[char] {
        &self.pool
    }

    /// First pool position holding `letter`.
    #[must_use]
    pub fn pool_index_of(&self, letter: char) -> Option<usize> {
        self.pool.iter().position(|&c| c == letter)
    }

    /// True once every letter of the current word is placed, by spelling it
    /// or by failing the round. Always true once finished.
    #[must_use]
    pub fn is_round_completed(&self) -> bool {
        self.current_word()
            .map_or(true, |word| self.letter_index == word.len())
    }

    /// True if the current word reached the mistake limit.
    #[must_use]
    pub fn is_round_failed(&self) -> bool {
        self.current_word()
            .is_some_and(|word| word.mistake_count() >= self.max_mistakes)
    }

    /// True if the word of `round` reached the mistake limit.
    pub fn is_round_failed_at(&self, round: usize) -> Result<bool> {
        let word = self.word_by_round(round)?;
        Ok(word.mistake_count() >= self.max_mistakes)
    }

    /// Letters of the current word placed so far.
    #[must_use]
    pub fn answered_letters(&self) -> Vec<char> {
        self.current_word()
            .map(|word| word.letters().take(self.letter_index).collect())
            .unwrap_or_default()
    }

    /// Word of a 1-based round.
    pub fn word_by_round(&self, round: usize) -> Result<&Word> {
        if round == 0 || round > self.words.len() {
            return Err(EngineError::OutOfRange {
                round,
                max_round: self.words.len(),
            });
        }
        Ok(&self.words[round - 1])
    }

    /// Answer shown when navigating to `round`.
    ///
    /// Earlier rounds are fully revealed, the current round shows what has
    /// been placed so far, later rounds are rejected.
    pub fn answer_for_round(&self, round: usize) -> Result<Vec<char>> {
        if round == 0 || round > self.round || round > self.words.len() {
            return Err(EngineError::OutOfRange {
                round,
                max_round: self.round.min(self.words.len()),
            });
        }

        if round < self.round {
            Ok(self.words[round - 1].letters().collect())
        } else {
            Ok(self.answered_letters())
        }
    }

    /// Snapshot of everything the UI renders.
    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView {
            letters: self.pool.to_vec(),
            answer_letters: self.answered_letters(),
            round: self.round,
            rounds_amount: self.rounds_amount(),
            round_failed: self.is_round_failed(),
            round_completed: self.is_round_completed(),
            finished: self.finished,
        }
    }

    // === Commands ===

    /// Claim that the letter at `pool_index` is the next letter of the word.
    ///
    /// A wrong letter or an out-of-range index is a mistake. Reaching the
    /// mistake limit completes the round with the answer revealed and the
    /// pool emptied. Input on a completed round or a finished game is
    /// ignored and returns `false`.
    pub fn submit_letter(&mut self, pool_index: usize) -> bool {
        if self.is_round_completed() {
            trace!(round = self.round, pool_index, "input ignored, round already completed");
            return false;
        }

        let expected = self.words[self.round - 1].letter_at(self.letter_index);
        match self.pool.get(pool_index).copied() {
            Some(letter) if Some(letter) == expected => {
                self.pool.remove(pool_index);
                self.letter_index += 1;
                trace!(round = self.round, %letter, letter_index = self.letter_index, "letter placed");
                true
            }
            picked => {
                trace!(round = self.round, pool_index, ?picked, ?expected, "wrong letter");
                self.record_mistake();
                false
            }
        }
    }

    /// `submit_letter` for the first pool position holding `letter`.
    ///
    /// A letter missing from the pool counts as a mistake.
    pub fn submit_key(&mut self, letter: char) -> bool {
        let index = self.pool_index_of(letter).unwrap_or(self.pool.len());
        self.submit_letter(index)
    }

    /// Move to the next round, or finish after the last one.
    ///
    /// Callers check `is_round_completed` first; calling early abandons the
    /// current word's progress. No-op once finished.
    pub fn advance_round(&mut self) {
        if self.finished {
            trace!("advance ignored, game already finished");
            return;
        }

        self.round += 1;
        if self.round > self.words.len() {
            self.finished = true;
            debug!(total_mistakes = self.total_mistakes(), "game finished");
            return;
        }

        self.letter_index = 0;
        self.scramble_current();
        debug!(round = self.round, "next round");
    }

    // === Statistics ===

    /// Words spelled without a single mistake.
    #[must_use]
    pub fn words_without_mistakes(&self) -> usize {
        stats::words_without_mistakes(&self.words)
    }

    #[must_use]
    pub fn total_mistakes(&self) -> u32 {
        stats::total_mistakes(&self.words)
    }

    /// Word with most mistakes (first in round order on ties).
    /// `None` when there were no mistakes.
    #[must_use]
    pub fn word_with_most_mistakes(&self) -> Option<&str> {
        stats::word_with_most_mistakes(&self.words)
    }

    #[must_use]
    pub fn stats(&self) -> GameStats {
        GameStats::from_words(&self.words)
    }

    // === Persistence ===

    /// Key the snapshot is stored under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Serializable state of the running game.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            words: self
                .words
                .iter()
                .map(|word| SnapshotWord {
                    text: word.text().to_string(),
                    mistake_amount: word.mistake_count(),
                })
                .collect(),
            round: self.round,
            current_letters: self.pool.iter().collect(),
        }
    }

    /// Write the snapshot to `store`.
    ///
    /// A finished game cannot be resumed, so saving it removes any stored
    /// snapshot instead.
    pub fn save<P: PersistenceAdapter + ?Sized>(&self, store: &mut P) -> Result<()> {
        if self.finished {
            debug!(key = %self.storage_key, "game finished, clearing saved game");
            store.delete(&self.storage_key);
            return Ok(());
        }

        let value = self.snapshot().to_json()?;
        store.set(&self.storage_key, value);
        trace!(key = %self.storage_key, round = self.round, "game saved");
        Ok(())
    }

    /// Replace the game with the snapshot in `store`.
    ///
    /// Returns `Ok(false)` without touching anything when no snapshot is
    /// stored. A snapshot that fails validation is rejected as a whole.
    pub fn load<P: PersistenceAdapter + ?Sized>(&mut self, store: &P) -> Result<bool> {
        let Some(value) = store.get(&self.storage_key) else {
            trace!(key = %self.storage_key, "no saved game");
            return Ok(false);
        };

        let restored = Snapshot::from_json(&value)
            .and_then(Snapshot::restore)
            .map_err(|err| {
                warn!(key = %self.storage_key, error = %err, "rejected saved game");
                EngineError::from(err)
            })?;

        self.words = restored.words;
        self.round = restored.round;
        self.letter_index = restored.letter_index;
        self.pool = restored.pool;
        self.finished = false;

        // A word already at the limit cannot still have letters to place.
        if self.is_round_failed() {
            self.fail_round();
        }

        debug!(round = self.round, rounds_amount = self.rounds_amount(), "game loaded");
        Ok(true)
    }

    /// True if `store` holds a snapshot under this engine's key.
    #[must_use]
    pub fn has_saved_game<P: PersistenceAdapter + ?Sized>(&self, store: &P) -> bool {
        store.get(&self.storage_key).is_some()
    }

    pub fn delete_saved_game<P: PersistenceAdapter + ?Sized>(&self, store: &mut P) {
        store.delete(&self.storage_key);
    }

    // === Internals ===

    fn record_mistake(&mut self) {
        let max_mistakes = self.max_mistakes;
        let word = &mut self.words[self.round - 1];
        word.record_mistake();
        let mistakes = word.mistake_count();
        debug!(round = self.round, mistakes, "mistake");

        if mistakes >= max_mistakes {
            self.fail_round();
        }
    }

    fn fail_round(&mut self) {
        self.letter_index = self.words[self.round - 1].len();
        self.pool.clear();
        debug!(round = self.round, "round failed");
    }

    fn scramble_current(&mut self) {
        self.pool = self.words[self.round - 1].letters_from(self.letter_index).collect();
        self.shuffler.shuffle(&mut self.pool);
    }
}

/// Restore-only helper: parse and validate a stored value without an engine.
///
/// Lets a host check a saved game before offering to resume it.
pub fn validate_saved_game(value: &str) -> std::result::Result<Snapshot, SnapshotError> {
    let snapshot = Snapshot::from_json(value)?;
    snapshot.clone().restore()?;
    Ok(snapshot)
}
