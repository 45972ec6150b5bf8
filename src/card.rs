//! Card types shared by the table games.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits, in deck-construction order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];
}

/// A playing card.
///
/// Immutable once drawn; rounds never modify cards, only move them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// The card's blackjack value: Ace 11, face cards 10, otherwise the rank.
    ///
    /// Aces are demoted to 1 at the hand level, not here.
    #[must_use]
    pub const fn blackjack_value(self) -> u8 {
        match self.rank {
            1 => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// The card's poker rank value: Ace 14, J/Q/K 11–13, otherwise the rank.
    ///
    /// Aces are high only; the engine's hold'em evaluator has no wheel
    /// straight.
    #[must_use]
    pub const fn poker_value(self) -> u8 {
        match self.rank {
            1 => 14,
            _ => self.rank,
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
