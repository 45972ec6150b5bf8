//! Slot machine: weighted reel sampling and payline evaluation.
//!
//! A spin samples a 5x3 grid of symbols and scores it against five fixed
//! paylines. The engine returns the grid, the winning lines, and the total
//! win; the caller settles the money.

mod grid;
mod paylines;
mod symbols;

pub use grid::{REELS, ROWS, ReelGrid};
pub use paylines::{PAYLINES, WinLine, evaluate};
pub use symbols::{Symbol, draw_symbol, total_weight};

use crate::amount::Amount;
use crate::rng::EngineRng;

/// The outcome of one spin.
#[derive(Debug, Clone)]
pub struct SlotRoundResult {
    /// The sampled symbol grid.
    pub grid: ReelGrid,
    /// Every payline that paid, with its run and payout.
    pub lines: Vec<WinLine>,
    /// Sum of all line payouts.
    pub total_win: Amount,
}

impl SlotRoundResult {
    /// Returns whether the spin won anything.
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.total_win.is_zero()
    }
}

/// Spins the reels for the given bet.
///
/// The bet is assumed pre-validated by the caller; the engine neither
/// reads nor mutates any balance.
///
/// # Example
///
/// ```
/// use pitboss::{Amount, EngineRng, slots};
///
/// let mut rng = EngineRng::seeded(7);
/// let result = slots::spin(&mut rng, Amount::from_whole(10));
/// assert_eq!(result.total_win, result.lines.iter().map(|l| l.payout).sum());
/// ```
pub fn spin(rng: &mut EngineRng, bet: Amount) -> SlotRoundResult {
    let grid = ReelGrid::sample(rng);
    let lines = evaluate(&grid, bet);
    let total_win = lines.iter().map(|line| line.payout).sum();

    SlotRoundResult {
        grid,
        lines,
        total_win,
    }
}
