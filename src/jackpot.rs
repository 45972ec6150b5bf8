//! Progressive jackpot ledger.
//!
//! Three pools (mini, midi, mega) accumulate a cut of every wagered bet
//! and pay out their full balance when triggered, resetting to a fixed
//! floor. The ledger is the only engine resource shared across concurrent
//! sessions; its pools sit behind a lock so a contribution can never be
//! lost to a racing reset and two sessions can never drain the same pool.

use crate::amount::Amount;
use crate::rng::EngineRng;
use crate::sync::Mutex;

/// Jackpot tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JackpotTier {
    /// The smallest, most frequent pool.
    Mini,
    /// The middle pool.
    Midi,
    /// The largest, rarest pool.
    Mega,
}

/// A triggered jackpot win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JackpotWin {
    /// Which pool hit.
    pub tier: JackpotTier,
    /// The pool's full balance at the moment it hit.
    pub amount: Amount,
}

/// A read-only copy of the three pool balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JackpotSnapshot {
    /// Mini pool balance.
    pub mini: Amount,
    /// Midi pool balance.
    pub midi: Amount,
    /// Mega pool balance.
    pub mega: Amount,
}

/// Jackpot tunables.
///
/// Defaults reproduce the standard table: floors of 50 / 500 / 5000,
/// a 5% contribution split 50/30/20, base hit chances of 5% / 1% / 0.1%
/// scaled by bet size up to a 5x cap.
///
/// # Example
///
/// ```
/// use pitboss::{Amount, JackpotConfig};
///
/// let config = JackpotConfig::default()
///     .with_mega_floor(Amount::from_whole(10_000))
///     .with_contribution_permille(40);
/// assert_eq!(config.contribution_permille, 40);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JackpotConfig {
    /// Floor (and seed) value of the mini pool.
    pub mini_floor: Amount,
    /// Floor (and seed) value of the midi pool.
    pub midi_floor: Amount,
    /// Floor (and seed) value of the mega pool.
    pub mega_floor: Amount,
    /// Share of each bet contributed to the pools, in permille.
    pub contribution_permille: u64,
    /// Percentage of the contribution routed to the mini pool.
    pub mini_split_percent: u64,
    /// Percentage of the contribution routed to the midi pool.
    pub midi_split_percent: u64,
    /// Percentage of the contribution routed to the mega pool.
    pub mega_split_percent: u64,
    /// Base mini hit chance per eligible check.
    pub mini_chance: f64,
    /// Base midi hit chance per eligible check.
    pub midi_chance: f64,
    /// Base mega hit chance per eligible check.
    pub mega_chance: f64,
    /// Bet amount that yields a 1x chance scaling factor.
    pub scale_unit: Amount,
    /// Upper bound on the chance scaling factor.
    pub scale_cap: f64,
}

impl Default for JackpotConfig {
    fn default() -> Self {
        Self {
            mini_floor: Amount::from_whole(50),
            midi_floor: Amount::from_whole(500),
            mega_floor: Amount::from_whole(5_000),
            contribution_permille: 50,
            mini_split_percent: 50,
            midi_split_percent: 30,
            mega_split_percent: 20,
            mini_chance: 0.05,
            midi_chance: 0.01,
            mega_chance: 0.001,
            scale_unit: Amount::from_whole(10),
            scale_cap: 5.0,
        }
    }
}

impl JackpotConfig {
    /// Sets the mini pool floor.
    #[must_use]
    pub const fn with_mini_floor(mut self, floor: Amount) -> Self {
        self.mini_floor = floor;
        self
    }

    /// Sets the midi pool floor.
    #[must_use]
    pub const fn with_midi_floor(mut self, floor: Amount) -> Self {
        self.midi_floor = floor;
        self
    }

    /// Sets the mega pool floor.
    #[must_use]
    pub const fn with_mega_floor(mut self, floor: Amount) -> Self {
        self.mega_floor = floor;
        self
    }

    /// Sets the per-bet contribution share, in permille.
    #[must_use]
    pub const fn with_contribution_permille(mut self, permille: u64) -> Self {
        self.contribution_permille = permille;
        self
    }

    /// Sets the contribution split across the pools, in percent of the
    /// contribution. The three shares should sum to 100.
    #[must_use]
    pub const fn with_split_percents(mut self, mini: u64, midi: u64, mega: u64) -> Self {
        self.mini_split_percent = mini;
        self.midi_split_percent = midi;
        self.mega_split_percent = mega;
        self
    }

    /// Sets the base hit chances per eligible check.
    #[must_use]
    pub const fn with_chances(mut self, mini: f64, midi: f64, mega: f64) -> Self {
        self.mini_chance = mini;
        self.midi_chance = midi;
        self.mega_chance = mega;
        self
    }

    /// Sets the bet-size scaling: `unit` is the bet that scales chances by
    /// 1x, `cap` the largest factor a big bet can reach.
    #[must_use]
    pub const fn with_scaling(mut self, unit: Amount, cap: f64) -> Self {
        self.scale_unit = unit;
        self.scale_cap = cap;
        self
    }

    fn floor(&self, tier: JackpotTier) -> Amount {
        match tier {
            JackpotTier::Mini => self.mini_floor,
            JackpotTier::Midi => self.midi_floor,
            JackpotTier::Mega => self.mega_floor,
        }
    }
}

struct Pools {
    mini: Amount,
    midi: Amount,
    mega: Amount,
}

impl Pools {
    fn get_mut(&mut self, tier: JackpotTier) -> &mut Amount {
        match tier {
            JackpotTier::Mini => &mut self.mini,
            JackpotTier::Midi => &mut self.midi,
            JackpotTier::Mega => &mut self.mega,
        }
    }
}

/// The shared progressive jackpot ledger.
///
/// Create one per process and share it across sessions; rounds do not own
/// it. Pool balances are monotonically non-decreasing except for the
/// explicit reset to the floor on a win.
pub struct JackpotLedger {
    config: JackpotConfig,
    pools: Mutex<Pools>,
}

impl JackpotLedger {
    /// Creates a ledger with every pool at its floor.
    #[must_use]
    pub const fn new(config: JackpotConfig) -> Self {
        let pools = Pools {
            mini: config.mini_floor,
            midi: config.midi_floor,
            mega: config.mega_floor,
        };
        Self {
            config,
            pools: Mutex::new(pools),
        }
    }

    /// Returns the ledger's configuration.
    #[must_use]
    pub const fn config(&self) -> &JackpotConfig {
        &self.config
    }

    /// Accrues a wagered bet into the pools.
    ///
    /// The contribution share of the bet (5% by default) is split across
    /// mini/midi/mega (50/30/20 by default) in exact cents arithmetic:
    /// a bet of 100.00 adds 2.50, 1.50, and 1.00.
    pub fn contribute(&self, bet: Amount) {
        let contribution = bet * self.config.contribution_permille / 1_000;

        let mut pools = self.pools.lock();
        pools.mini += contribution * self.config.mini_split_percent / 100;
        pools.midi += contribution * self.config.midi_split_percent / 100;
        pools.mega += contribution * self.config.mega_split_percent / 100;
    }

    /// Runs one jackpot trigger check for an eligible spin.
    ///
    /// A single uniform draw is tested against the tier bands in strict
    /// precedence: mega, then midi, then mini, so at most one tier can
    /// hit per check. Chances scale with bet size, capped. On a hit the pool
    /// pays its full balance and resets to its floor; the other pools are
    /// untouched.
    ///
    /// The draw happens before the lock is taken; the read-and-reset of
    /// the winning pool is a single critical section, so concurrent
    /// sessions cannot both drain the same pool.
    pub fn check_trigger(&self, bet: Amount, rng: &mut EngineRng) -> Option<JackpotWin> {
        let draw = rng.uniform();

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let scale = (bet.cents() as f64 / self.config.scale_unit.cents() as f64)
            .min(self.config.scale_cap);

        let tier = if draw < self.config.mega_chance * scale {
            JackpotTier::Mega
        } else if draw < self.config.midi_chance * scale {
            JackpotTier::Midi
        } else if draw < self.config.mini_chance * scale {
            JackpotTier::Mini
        } else {
            return None;
        };

        let mut pools = self.pools.lock();
        let pool = pools.get_mut(tier);
        let amount = *pool;
        *pool = self.config.floor(tier);

        Some(JackpotWin { tier, amount })
    }

    /// Returns a read-only copy of the three pool balances.
    #[must_use]
    pub fn snapshot(&self) -> JackpotSnapshot {
        let pools = self.pools.lock();
        JackpotSnapshot {
            mini: pools.mini,
            midi: pools.midi,
            mega: pools.mega,
        }
    }

    /// Resets every pool to its floor.
    pub fn reset(&self) {
        let mut pools = self.pools.lock();
        pools.mini = self.config.mini_floor;
        pools.midi = self.config.midi_floor;
        pools.mega = self.config.mega_floor;
    }
}
