//! The 5x3 symbol grid.

use crate::rng::EngineRng;

use super::symbols::{Symbol, draw_symbol};

/// Number of reels (columns).
pub const REELS: usize = 5;
/// Number of rows per reel.
pub const ROWS: usize = 3;

/// A 5x3 grid of sampled symbols, indexed `[reel][row]`.
///
/// Each cell is an independent weighted draw. This is a deliberate
/// simplification over physical reel strips: cells within a reel are not
/// correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReelGrid([[Symbol; ROWS]; REELS]);

impl ReelGrid {
    /// Samples a fresh grid: 15 independent weighted draws.
    pub fn sample(rng: &mut EngineRng) -> Self {
        let mut cells = [[Symbol::Cherry; ROWS]; REELS];
        for reel in cells.iter_mut() {
            for cell in reel.iter_mut() {
                *cell = draw_symbol(rng);
            }
        }
        Self(cells)
    }

    /// Creates a grid from explicit cells, indexed `[reel][row]`.
    #[must_use]
    pub const fn from_cells(cells: [[Symbol; ROWS]; REELS]) -> Self {
        Self(cells)
    }

    /// Returns the symbol at the given reel and row.
    #[must_use]
    pub const fn symbol(&self, reel: usize, row: usize) -> Symbol {
        self.0[reel][row]
    }

    /// Returns the raw cells, indexed `[reel][row]`.
    #[must_use]
    pub const fn cells(&self) -> &[[Symbol; ROWS]; REELS] {
        &self.0
    }
}
