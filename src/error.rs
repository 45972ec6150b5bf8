//! Error types for engine operations.

use thiserror::Error;

/// The operating system entropy source could not be read.
///
/// Outcome fairness depends on a cryptographically strong random source,
/// so there is no weaker fallback generator: callers must treat this as
/// fatal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operating system entropy source is unavailable")]
pub struct EntropyError;

/// Errors that can occur when drawing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left.
    ///
    /// A round consumes at most 21 cards (blackjack) or 9 (hold'em), so
    /// this indicates a broken engine invariant rather than a playable
    /// condition. The engine never substitutes an undefined card.
    #[error("deck is exhausted")]
    Exhausted,
}

/// Errors that can occur while driving a hold'em round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HoldemError {
    /// The round has already reached showdown; stages only move forward.
    #[error("round is already at showdown")]
    RoundOver,
    /// Showdown was requested before all five community cards were dealt.
    #[error("round has not reached showdown")]
    NotAtShowdown,
    /// The round's deck ran out of cards mid-stage (broken invariant).
    #[error(transparent)]
    Deck(#[from] DeckError),
}
