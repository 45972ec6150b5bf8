use crate::amount::Amount;
use crate::card::Card;
use crate::error::DeckError;

use super::BlackjackRound;

/// Outcome of a resolved blackjack round, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlackjackOutcome {
    /// Player wins even money (dealer busts or player value is higher).
    Win,
    /// Player loses the bet.
    Loss,
    /// Tie; the stake is returned.
    Push,
    /// Player has a natural blackjack and the dealer does not.
    Blackjack,
}

/// Result of resolving a round against a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlackjackResult {
    /// The outcome from the player's side.
    pub outcome: BlackjackOutcome,
    /// Total returned to the player, stake included (zero on a loss).
    pub payout: Amount,
}

impl BlackjackRound {
    /// Plays out the dealer's hand: hit while the value is below 17, then
    /// stand (or bust).
    ///
    /// The policy is the single rule "draw to 17": any 17 stops the
    /// dealer, soft or hard, with no special case either way.
    ///
    /// Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck runs out, which valid
    /// play can never cause.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DeckError> {
        let mut drawn = Vec::new();

        while self.dealer.value() < 17 {
            let card = self.deck.draw()?;
            self.dealer.add_card(card);
            drawn.push(card);
        }

        Ok(drawn)
    }

    /// Resolves the round against the given bet.
    ///
    /// Rules apply in this exact precedence:
    ///
    /// 1. player bust: loss, payout 0
    /// 2. player blackjack and dealer not: blackjack, bet x 2.5
    /// 3. dealer bust, or player value above dealer's: win, bet x 2
    /// 4. equal values: push, stake returned
    /// 5. otherwise: loss, payout 0
    ///
    /// A dealer blackjack tying a player blackjack falls into rule 4 and
    /// pushes, because both values are 21. That is a consequence of the
    /// equality rule, not a separate case.
    #[must_use]
    pub fn resolve(&self, bet: Amount) -> BlackjackResult {
        let player = &self.player;
        let dealer = &self.dealer;

        let (outcome, payout) = if player.is_bust() {
            (BlackjackOutcome::Loss, Amount::ZERO)
        } else if player.is_blackjack() && !dealer.is_blackjack() {
            (BlackjackOutcome::Blackjack, bet * 5 / 2)
        } else if dealer.is_bust() || player.value() > dealer.value() {
            (BlackjackOutcome::Win, bet * 2)
        } else if player.value() == dealer.value() {
            (BlackjackOutcome::Push, bet)
        } else {
            (BlackjackOutcome::Loss, Amount::ZERO)
        };

        BlackjackResult { outcome, payout }
    }
}
