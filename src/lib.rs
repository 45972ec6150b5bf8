//! A casino outcome engine.
//!
//! The crate determines randomized outcomes for three games (a 5x3
//! multi-payline slot machine, blackjack, and simplified heads-up Texas
//! hold'em) plus a shared progressive jackpot ledger. It is synchronous
//! and computation-only: callers pass a bet in, get an immutable result
//! back, and settle balances themselves. Rendering, animation, and
//! balance storage live outside the engine.
//!
//! All sampling flows through [`EngineRng`], a ChaCha20 generator seeded
//! from the operating system entropy source; there is no weaker fallback.
//! Money is fixed-point cents in [`Amount`], so payout multipliers and
//! bet splits are exact.
//!
//! # Example
//!
//! ```
//! use pitboss::{Amount, EngineRng, JackpotConfig, JackpotLedger, slots};
//!
//! let mut rng = EngineRng::seeded(42);
//! let bet = Amount::from_whole(10);
//!
//! let result = slots::spin(&mut rng, bet);
//! let ledger = JackpotLedger::new(JackpotConfig::default());
//! ledger.contribute(bet);
//! let _ = (result.total_win, ledger.snapshot());
//! ```

pub mod amount;
pub mod blackjack;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod holdem;
pub mod jackpot;
pub mod rng;
pub mod slots;
pub mod stats;
mod sync;

// Re-export main types
pub use amount::Amount;
pub use blackjack::{BlackjackOutcome, BlackjackResult, BlackjackRound};
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{DeckError, EntropyError, HoldemError};
pub use hand::BlackjackHand;
pub use holdem::{
    HandCategory, HoldemOutcome, HoldemResult, HoldemRound, PokerHandEvaluation, Stage,
    StageAdvance,
};
pub use jackpot::{JackpotConfig, JackpotLedger, JackpotSnapshot, JackpotTier, JackpotWin};
pub use rng::EngineRng;
pub use slots::{ReelGrid, SlotRoundResult, Symbol, WinLine};
pub use stats::SessionStats;
