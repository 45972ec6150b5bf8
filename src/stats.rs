//! Session return-to-player bookkeeping.

use crate::amount::Amount;

/// Running totals for a play session.
///
/// Pure bookkeeping for the presentation layer; the engine itself never
/// owns or persists a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    /// Number of rounds recorded.
    pub rounds: u64,
    /// Total amount wagered.
    pub wagered: Amount,
    /// Total amount paid out.
    pub won: Amount,
}

impl SessionStats {
    /// Creates empty statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rounds: 0,
            wagered: Amount::ZERO,
            won: Amount::ZERO,
        }
    }

    /// Records one round's wager and payout.
    pub fn record(&mut self, bet: Amount, win: Amount) {
        self.rounds += 1;
        self.wagered += bet;
        self.won += win;
    }

    /// Returns the observed return to player as a percentage.
    ///
    /// Zero until something has been wagered.
    #[must_use]
    pub fn rtp(&self) -> f64 {
        if self.wagered.is_zero() {
            return 0.0;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let ratio = self.won.cents() as f64 / self.wagered.cents() as f64;
        ratio * 100.0
    }
}
