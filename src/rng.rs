//! Cryptographically strong random source.
//!
//! Every sample the engine takes (symbol draws, shuffles, jackpot trigger
//! checks) goes through [`EngineRng`]. The generator is a ChaCha20 stream
//! cipher seeded from the operating system entropy source; if that source
//! is unavailable, construction fails and there is no weaker fallback.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::EntropyError;

/// The engine's random number generator.
///
/// # Example
///
/// ```
/// use pitboss::EngineRng;
///
/// let mut rng = EngineRng::seeded(42);
/// let x = rng.uniform();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct EngineRng(ChaCha20Rng);

impl EngineRng {
    /// Creates a generator seeded from the operating system entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError`] if the entropy source cannot be read. This
    /// is fatal by design: the engine never falls back to a predictable
    /// generator.
    pub fn from_os_entropy() -> Result<Self, EntropyError> {
        ChaCha20Rng::try_from_os_rng()
            .map(Self)
            .map_err(|_| EntropyError)
    }

    /// Creates a deterministic generator from a seed.
    ///
    /// Intended for tests and simulations; seeded streams are reproducible
    /// and must not be used for live play.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha20Rng::seed_from_u64(seed))
    }

    /// Returns a uniform value in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

impl RngCore for EngineRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest);
    }
}
