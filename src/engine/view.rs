//! Read-only view of the engine for rendering.

use serde::Serialize;

/// Everything a UI needs to draw the current round.
///
/// Produced by `RoundEngine::view`. Holding a view never borrows the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundView {
    /// Scrambled letters still to place. Indices here are what
    /// `submit_letter` expects.
    pub letters: Vec<char>,
    /// Letters placed so far (the whole word once the round is completed).
    pub answer_letters: Vec<char>,
    /// 1-based round; `rounds_amount + 1` once finished.
    pub round: usize,
    pub rounds_amount: usize,
    pub round_failed: bool,
    pub round_completed: bool,
    pub finished: bool,
}

impl RoundView {
    /// Round number to display, clamped to the last round once finished.
    #[must_use]
    pub fn shown_round(&self) -> usize {
        self.round.min(self.rounds_amount)
    }
}
