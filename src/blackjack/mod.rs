//! Blackjack: round flow, dealer policy, and outcome resolution.
//!
//! A round exclusively owns a freshly shuffled double deck. The caller
//! drives it with [`BlackjackRound::hit`] and [`BlackjackRound::dealer_play`],
//! then settles with [`BlackjackRound::resolve`].

mod resolve;

pub use resolve::{BlackjackOutcome, BlackjackResult};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::BlackjackHand;
use crate::rng::EngineRng;

/// One blackjack round: a double deck plus the player and dealer hands.
///
/// The deck is consumed from the top and never reshuffled mid-round; the
/// next round builds a new one.
#[derive(Debug)]
pub struct BlackjackRound {
    deck: Deck,
    player: BlackjackHand,
    dealer: BlackjackHand,
}

impl BlackjackRound {
    /// Starts a round: shuffles a double deck and deals two cards each to
    /// the player and the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck runs out, which cannot
    /// happen with a freshly built deck.
    pub fn deal(rng: &mut EngineRng) -> Result<Self, DeckError> {
        Self::deal_from(Deck::double(rng))
    }

    /// Starts a round from an explicit deck.
    ///
    /// Useful for tests and simulations that need a known deal order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck holds fewer than four
    /// cards.
    pub fn deal_from(mut deck: Deck) -> Result<Self, DeckError> {
        let mut player = BlackjackHand::new();
        let mut dealer = BlackjackHand::new();

        player.add_card(deck.draw()?);
        player.add_card(deck.draw()?);
        dealer.add_card(deck.draw()?);
        dealer.add_card(deck.draw()?);

        Ok(Self {
            deck,
            player,
            dealer,
        })
    }

    /// Player action: draw one card.
    ///
    /// The hand's value, softness, and bust state are derived from its
    /// cards; nothing else needs updating.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck runs out, which valid
    /// play (at most 21 cards per round) can never cause.
    pub fn hit(&mut self) -> Result<Card, DeckError> {
        let card = self.deck.draw()?;
        self.player.add_card(card);
        Ok(card)
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &BlackjackHand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &BlackjackHand {
        &self.dealer
    }

    /// Returns the number of cards left in the round's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }
}
