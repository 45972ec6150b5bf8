//! Fixed payline patterns and line scoring.

use crate::amount::Amount;

use super::grid::{REELS, ReelGrid};
use super::symbols::Symbol;

/// Row index per reel for each of the five paylines:
/// middle, top, bottom, "V", and "^".
pub const PAYLINES: [[usize; REELS]; 5] = [
    [1, 1, 1, 1, 1],
    [0, 0, 0, 0, 0],
    [2, 2, 2, 2, 2],
    [0, 1, 2, 1, 0],
    [2, 1, 0, 1, 2],
];

/// A winning payline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    /// Payline number, 1 through 5.
    pub line_id: u8,
    /// Row index per reel, for highlighting the line.
    pub rows: [usize; REELS],
    /// The symbol that matched.
    pub symbol: Symbol,
    /// Length of the matching run (3 to 5).
    pub run: u8,
    /// Payout for this line.
    pub payout: Amount,
}

/// Multiplier for a run of the given length.
///
/// A 3-run returns the stake, a 4-run pays 10x for the two premium symbols
/// and 5x otherwise, and a full 5-run pays the symbol's base payout.
const fn run_multiplier(symbol: Symbol, run: u8) -> u64 {
    match run {
        3 => 1,
        4 => {
            if symbol.is_premium() { 10 } else { 5 }
        }
        5 => symbol.base_payout(),
        _ => 0,
    }
}

/// Scores a single payline against the grid.
///
/// Matching is anchored at reel 0 and stops at the first differing symbol;
/// there is no wild substitution and runs cannot start mid-line. Runs
/// shorter than 3 pay nothing.
fn score_line(grid: &ReelGrid, line_id: u8, rows: [usize; REELS], bet: Amount) -> Option<WinLine> {
    let first = grid.symbol(0, rows[0]);

    let mut run: u8 = 1;
    for reel in 1..REELS {
        if grid.symbol(reel, rows[reel]) != first {
            break;
        }
        run += 1;
    }

    if run < 3 {
        return None;
    }

    Some(WinLine {
        line_id,
        rows,
        symbol: first,
        run,
        payout: bet * run_multiplier(first, run),
    })
}

/// Evaluates all five paylines independently.
///
/// Overlapping wins are not mutually exclusive; every qualifying line is
/// returned and the caller sums the payouts.
pub fn evaluate(grid: &ReelGrid, bet: Amount) -> Vec<WinLine> {
    PAYLINES
        .iter()
        .enumerate()
        .filter_map(|(index, &rows)| score_line(grid, index as u8 + 1, rows, bet))
        .collect()
}
