//! Reel symbols, their weight table, and the weighted sampler.

use crate::rng::EngineRng;

/// A reel symbol, in ascending payout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Cherry, the most common symbol (2x base payout).
    Cherry,
    /// Lemon (3x).
    Lemon,
    /// Orange (5x).
    Orange,
    /// Grape (10x).
    Grape,
    /// Bell (20x).
    Bell,
    /// Diamond (50x).
    Diamond,
    /// Seven, the rarest symbol (100x).
    Seven,
}

struct SymbolWeight {
    symbol: Symbol,
    weight: u32,
    payout: u64,
}

/// Selection weight and base payout multiplier per symbol. The weights sum
/// to 100, tuned for a roughly 96.5% theoretical return to player.
const SYMBOL_TABLE: [SymbolWeight; 7] = [
    SymbolWeight { symbol: Symbol::Cherry, weight: 30, payout: 2 },
    SymbolWeight { symbol: Symbol::Lemon, weight: 25, payout: 3 },
    SymbolWeight { symbol: Symbol::Orange, weight: 20, payout: 5 },
    SymbolWeight { symbol: Symbol::Grape, weight: 15, payout: 10 },
    SymbolWeight { symbol: Symbol::Bell, weight: 7, payout: 20 },
    SymbolWeight { symbol: Symbol::Diamond, weight: 2, payout: 50 },
    SymbolWeight { symbol: Symbol::Seven, weight: 1, payout: 100 },
];

const TOTAL_WEIGHT: u32 = {
    let mut sum = 0;
    let mut i = 0;
    while i < SYMBOL_TABLE.len() {
        sum += SYMBOL_TABLE[i].weight;
        i += 1;
    }
    sum
};

impl Symbol {
    /// All symbols, in table order.
    pub const ALL: [Self; 7] = [
        Self::Cherry,
        Self::Lemon,
        Self::Orange,
        Self::Grape,
        Self::Bell,
        Self::Diamond,
        Self::Seven,
    ];

    /// The symbol's base payout multiplier, paid on a full 5-symbol run.
    #[must_use]
    pub const fn base_payout(self) -> u64 {
        let mut i = 0;
        while i < SYMBOL_TABLE.len() {
            if SYMBOL_TABLE[i].symbol as usize == self as usize {
                return SYMBOL_TABLE[i].payout;
            }
            i += 1;
        }
        0
    }

    /// The symbol's selection weight out of [`total_weight`].
    #[must_use]
    pub const fn weight(self) -> u32 {
        let mut i = 0;
        while i < SYMBOL_TABLE.len() {
            if SYMBOL_TABLE[i].symbol as usize == self as usize {
                return SYMBOL_TABLE[i].weight;
            }
            i += 1;
        }
        0
    }

    /// Whether the symbol is in the top payout tier (Seven or Diamond),
    /// which earns the higher 4-run multiplier.
    #[must_use]
    pub const fn is_premium(self) -> bool {
        matches!(self, Self::Seven | Self::Diamond)
    }
}

/// Sum of all symbol weights.
#[must_use]
pub const fn total_weight() -> u32 {
    TOTAL_WEIGHT
}

/// Draws one symbol, weighted by the symbol table.
///
/// A uniform value is scaled to the weight total and walked along the
/// cumulative weight prefix sums, so each symbol lands with probability
/// `weight / total_weight` exactly.
pub fn draw_symbol(rng: &mut EngineRng) -> Symbol {
    let target = rng.uniform() * f64::from(TOTAL_WEIGHT);
    let mut cumulative = 0.0;

    for entry in &SYMBOL_TABLE {
        cumulative += f64::from(entry.weight);
        if target < cumulative {
            return entry.symbol;
        }
    }

    // Unreachable: uniform() < 1 keeps target below the final bound
    SYMBOL_TABLE[0].symbol
}
