//! Deck construction, shuffling, and drawing.

use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;
use crate::rng::EngineRng;

/// An ordered deck of cards, exclusively owned by one round.
///
/// Cards are consumed by drawing from one end and never returned during a
/// round; a fresh shuffled deck is built when the next round starts.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the cards of `count` concatenated standard decks.
    fn build(count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count * DECK_SIZE);

        for _ in 0..count {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards
    }

    /// Creates a shuffled single 52-card deck.
    ///
    /// Shuffling uses an unbiased in-place permutation driven by the
    /// engine RNG, so every ordering is equally likely.
    #[must_use]
    pub fn standard(rng: &mut EngineRng) -> Self {
        let mut cards = Self::build(1);
        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a shuffled double deck (104 cards), as dealt for blackjack.
    #[must_use]
    pub fn double(rng: &mut EngineRng) -> Self {
        let mut cards = Self::build(2);
        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck from an explicit card order, without shuffling.
    ///
    /// Cards are drawn from the back of the list. Useful for tests and
    /// simulations that need a known deal.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if no cards remain. Valid rounds
    /// never come close to draining a deck, so this error signals a broken
    /// invariant and should abort the round.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the undrawn cards, top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
