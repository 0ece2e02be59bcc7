//! Property tests for the letter pool invariants.
//!
//! For arbitrary words, seeds and pick sequences, the pool must stay a
//! permutation of the unplaced suffix of the current word.

use proptest::prelude::*;
use spelling_trainer::{GameRng, MemoryStore, RoundEngine, TrainerConfig};

fn check_pool_invariant(engine: &RoundEngine<GameRng>) {
    let Some(word) = engine.current_word() else {
        return;
    };

    let pool = engine.scrambled_letters();
    assert_eq!(pool.len() + engine.letter_index(), word.len());

    let mut remaining: Vec<char> = word.letters_from(engine.letter_index()).collect();
    let mut pooled = pool.to_vec();
    remaining.sort_unstable();
    pooled.sort_unstable();
    assert_eq!(remaining, pooled);

    let placed: Vec<char> = word.letters().take(engine.letter_index()).collect();
    assert_eq!(engine.answered_letters(), placed);
}

proptest! {
    /// Test that any sequence of picks keeps the pool consistent.
    #[test]
    fn test_pool_stays_permutation(
        words in prop::collection::vec("[a-z]{1,10}", 1..5),
        seed in any::<u64>(),
        picks in prop::collection::vec(0usize..12, 0..80),
    ) {
        let config = TrainerConfig::default().with_seed(seed);
        let mut engine = RoundEngine::with_config(words.clone(), &config).unwrap();
        check_pool_invariant(&engine);

        for pick in picks {
            if engine.is_finished() {
                break;
            }
            if engine.is_round_completed() {
                engine.advance_round();
            } else {
                engine.submit_letter(pick);
            }
            check_pool_invariant(&engine);

            if engine.is_round_failed() {
                prop_assert!(engine.is_round_completed());
                prop_assert!(engine.scrambled_letters().is_empty());
            }
        }

        let sum: u32 = engine.words().iter().map(|w| w.mistake_count()).sum();
        prop_assert_eq!(engine.total_mistakes(), sum);
        if sum == 0 {
            prop_assert_eq!(engine.word_with_most_mistakes(), None);
        }
    }

    /// Test that always picking the correct letter never records a mistake.
    #[test]
    fn test_correct_picks_never_fail(
        words in prop::collection::vec("[a-z]{1,10}", 1..5),
        seed in any::<u64>(),
    ) {
        let config = TrainerConfig::default().with_seed(seed);
        let mut engine = RoundEngine::with_config(words.clone(), &config).unwrap();

        while !engine.is_finished() {
            while !engine.is_round_completed() {
                let word = engine.current_word().unwrap();
                let next = word.letter_at(engine.letter_index()).unwrap();
                let index = engine.pool_index_of(next).unwrap();
                prop_assert!(engine.submit_letter(index));
            }
            prop_assert!(!engine.is_round_failed());
            engine.advance_round();
        }

        prop_assert_eq!(engine.total_mistakes(), 0);
        prop_assert_eq!(engine.words_without_mistakes(), words.len());
    }

    /// Test that save then load restores an equivalent state mid-game.
    #[test]
    fn test_save_load_equivalence(
        words in prop::collection::vec("[a-z]{1,8}", 1..4),
        seed in any::<u64>(),
        picks in prop::collection::vec(0usize..10, 0..20),
    ) {
        let config = TrainerConfig::default().with_seed(seed);
        let mut engine = RoundEngine::with_config(words.clone(), &config).unwrap();
        for pick in picks {
            if engine.is_round_completed() {
                break;
            }
            engine.submit_letter(pick);
        }

        let mut store = MemoryStore::new();
        engine.save(&mut store).unwrap();

        let mut restored = RoundEngine::with_config(["placeholder"], &config).unwrap();
        prop_assert!(restored.load(&store).unwrap());
        prop_assert_eq!(restored.round(), engine.round());
        prop_assert_eq!(restored.words(), engine.words());
        prop_assert_eq!(restored.letter_index(), engine.letter_index());
        prop_assert_eq!(restored.scrambled_letters(), engine.scrambled_letters());
    }
}
