//! Host-side game flow around a `RoundEngine`.
//!
//! `Trainer` owns the engine, the word bank, the RNG and the store. It picks
//! words for each new game, saves after every accepted input, offers the
//! saved game for resuming, and clears it when the game ends. A UI drives it
//! with letter indices or key presses and renders `view()`.
//!
//! ```
//! use spelling_trainer::{LetterOutcome, MemoryStore, Trainer, TrainerConfig};
//!
//! let config = TrainerConfig::default().with_rounds_amount(1).with_seed(7);
//! let mut trainer = Trainer::new(["cat"], config, MemoryStore::new()).unwrap();
//!
//! for key in ['c', 'a', 't'] {
//!     assert_eq!(trainer.press_key(key).unwrap(), LetterOutcome::Correct);
//! }
//! assert!(trainer.next_round().unwrap());
//! assert!(trainer.is_finished());
//! assert!(!trainer.has_saved_game());
//! ```

use tracing::{debug, warn};

use crate::core::{EngineError, GameRng, Result, TrainerConfig, Word};
use crate::engine::{GameStats, RoundEngine, RoundView};
use crate::persistence::PersistenceAdapter;
use crate::words::select_words;

/// What a letter selection did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterOutcome {
    /// Letter placed.
    Correct,
    /// Wrong letter; the round continues.
    Mistake,
    /// Wrong letter that used up the last allowed mistake.
    RoundFailed,
    /// Round already completed or game finished; nothing changed.
    Ignored,
}

impl LetterOutcome {
    /// True when the UI should flash an error.
    #[must_use]
    pub fn is_mistake(self) -> bool {
        matches!(self, LetterOutcome::Mistake | LetterOutcome::RoundFailed)
    }
}

/// A running trainer session.
pub struct Trainer<P: PersistenceAdapter> {
    config: TrainerConfig,
    bank: Vec<String>,
    rng: GameRng,
    store: P,
    engine: RoundEngine<GameRng>,
}

impl<P: PersistenceAdapter> Trainer<P> {
    /// Start a fresh game with words drawn from `bank`.
    ///
    /// A snapshot already in `store` is left alone; call `resume` to adopt it.
    pub fn new<I, W>(bank: I, config: TrainerConfig, store: P) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let bank = bank.into_iter().map(Into::into).collect::<Vec<String>>();
        if let Some(bad) = bank.iter().find(|text| Word::new(text.as_str()).is_err()) {
            return Err(EngineError::InvalidWord(bad.clone()));
        }

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let engine = Self::new_engine(&bank, &config, &mut rng)?;

        Ok(Self {
            config,
            bank,
            rng,
            store,
            engine,
        })
    }

    fn new_engine(bank: &[String], config: &TrainerConfig, rng: &mut GameRng) -> Result<RoundEngine<GameRng>> {
        let mut words_rng = rng.fork();
        let letters_rng = rng.fork();
        let words = select_words(bank, config.rounds_amount, &mut words_rng);
        RoundEngine::with_shuffler(words, config, letters_rng)
    }

    // === Saved games ===

    #[must_use]
    pub fn has_saved_game(&self) -> bool {
        self.engine.has_saved_game(&self.store)
    }

    /// Continue the saved game, if there is one.
    ///
    /// A saved game that cannot be restored is deleted and treated as
    /// absent; the current game is kept.
    pub fn resume(&mut self) -> Result<bool> {
        match self.engine.load(&self.store) {
            Ok(loaded) => Ok(loaded),
            Err(EngineError::InvalidSnapshot(err)) => {
                warn!(error = %err, "discarding unreadable saved game");
                self.engine.delete_saved_game(&mut self.store);
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Throw away the current game and any saved game, and start over with
    /// newly drawn words.
    pub fn restart(&mut self) -> Result<()> {
        self.engine = Self::new_engine(&self.bank, &self.config, &mut self.rng)?;
        self.engine.delete_saved_game(&mut self.store);
        debug!(rounds_amount = self.engine.rounds_amount(), "new game");
        Ok(())
    }

    // === Input ===

    /// Select the letter at `index` of the scrambled pool.
    pub fn select_letter(&mut self, index: usize) -> Result<LetterOutcome> {
        if self.engine.is_round_completed() {
            return Ok(LetterOutcome::Ignored);
        }

        let outcome = if self.engine.submit_letter(index) {
            LetterOutcome::Correct
        } else if self.engine.is_round_failed() {
            LetterOutcome::RoundFailed
        } else {
            LetterOutcome::Mistake
        };

        self.engine.save(&mut self.store)?;
        Ok(outcome)
    }

    /// Select a letter by key. A key matching no pooled letter is a mistake.
    pub fn press_key(&mut self, key: char) -> Result<LetterOutcome> {
        let index = self
            .engine
            .pool_index_of(key)
            .unwrap_or(self.engine.scrambled_letters().len());
        self.select_letter(index)
    }

    /// Move on once the current round is completed.
    ///
    /// Returns `false` without changing anything while the round still has
    /// letters to place. Finishing the game clears the saved game.
    pub fn next_round(&mut self) -> Result<bool> {
        if self.engine.is_finished() || !self.engine.is_round_completed() {
            return Ok(false);
        }

        self.engine.advance_round();
        self.engine.save(&mut self.store)?;
        Ok(true)
    }

    // === Queries ===

    #[must_use]
    pub fn view(&self) -> RoundView {
        self.engine.view()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.engine.is_finished()
    }

    /// Summary, available once the game is finished.
    #[must_use]
    pub fn stats(&self) -> Option<GameStats> {
        self.engine.is_finished().then(|| self.engine.stats())
    }

    /// Answer letters for navigating to an earlier or the current round.
    pub fn answer_for_round(&self, round: usize) -> Result<Vec<char>> {
        self.engine.answer_for_round(round)
    }

    #[must_use]
    pub fn engine(&self) -> &RoundEngine<GameRng> {
        &self.engine
    }

    #[must_use]
    pub fn store(&self) -> &P {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }
}
