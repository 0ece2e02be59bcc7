//! Word-list selection for a game.
//!
//! A game draws `rounds_amount` words from a larger bank in shuffled order.
//! The engine itself plays words in the order it is given.

use crate::core::Shuffle;

/// Shuffle `bank` and keep the first `amount` words.
///
/// Returns fewer words when the bank is smaller than `amount`.
pub fn select_words<W, S>(bank: &[W], amount: usize, shuffler: &mut S) -> Vec<String>
where
    W: AsRef<str>,
    S: Shuffle + ?Sized,
{
    let mut words: Vec<&str> = bank.iter().map(AsRef::as_ref).collect();
    shuffler.shuffle(&mut words);
    words.truncate(amount);
    words.into_iter().map(str::to_string).collect()
}
