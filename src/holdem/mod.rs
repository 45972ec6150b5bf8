//! Heads-up Texas hold'em: staged round state machine and showdown.
//!
//! A round deals two hole cards each to the player and the dealer from its
//! own single 52-card deck, then advances one stage at a time through the
//! flop, turn, and river. Advancing past the river deals nothing; it
//! evaluates the showdown instead.

mod eval;

pub use eval::{HandCategory, PokerHandEvaluation, evaluate_hand};

use crate::amount::Amount;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckError, HoldemError};
use crate::rng::EngineRng;

/// Betting-round stage, in dealing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Hole cards dealt, no community cards.
    Preflop,
    /// Three community cards.
    Flop,
    /// Four community cards.
    Turn,
    /// Five community cards.
    River,
    /// Terminal; hands are compared.
    Showdown,
}

/// What an [`HoldemRound::advance`] call produced.
#[derive(Debug, Clone)]
pub enum StageAdvance {
    /// Community cards were dealt and the round moved to this stage.
    Dealt(Stage),
    /// The round was at the river: no card was dealt, the stage moved to
    /// showdown, and the hands were evaluated.
    Showdown(HoldemResult),
}

/// Outcome of the showdown, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldemOutcome {
    /// Player's hand ranks higher; the full pot is paid.
    Win,
    /// Dealer's hand ranks higher; nothing is paid.
    Loss,
    /// Equal tiers; the pot is split in half.
    Tie,
}

/// Result of the showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldemResult {
    /// The player's hand evaluation.
    pub player_eval: PokerHandEvaluation,
    /// The dealer's hand evaluation.
    pub dealer_eval: PokerHandEvaluation,
    /// The outcome from the player's side.
    pub outcome: HoldemOutcome,
    /// Amount paid to the player: the pot, half of it, or zero.
    pub payout: Amount,
}

/// One heads-up hold'em round.
///
/// The round exclusively owns its deck and is mutated only by
/// [`HoldemRound::advance`]; the stage moves strictly forward and never
/// skips.
#[derive(Debug)]
pub struct HoldemRound {
    deck: Deck,
    player_hole: [Card; 2],
    dealer_hole: [Card; 2],
    community: Vec<Card>,
    stage: Stage,
    pot: Amount,
}

impl HoldemRound {
    /// Starts a round: shuffles a single deck, deals two hole cards each,
    /// and sets the pot to twice the bet (both sides post the same stake;
    /// no further betting rounds are modeled).
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck runs out, which cannot
    /// happen with a freshly built deck.
    pub fn start(rng: &mut EngineRng, bet: Amount) -> Result<Self, DeckError> {
        Self::start_from(Deck::standard(rng), bet)
    }

    /// Starts a round from an explicit deck.
    ///
    /// Useful for tests and simulations that need a known deal order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck holds fewer than four
    /// cards.
    pub fn start_from(mut deck: Deck, bet: Amount) -> Result<Self, DeckError> {
        let player_hole = [deck.draw()?, deck.draw()?];
        let dealer_hole = [deck.draw()?, deck.draw()?];

        Ok(Self {
            deck,
            player_hole,
            dealer_hole,
            community: Vec::with_capacity(5),
            stage: Stage::Preflop,
            pot: bet * 2,
        })
    }

    /// Advances the round exactly one stage.
    ///
    /// Preflop deals the three flop cards, flop and turn one card each.
    /// At the river no card is dealt: the stage moves to showdown and the
    /// evaluated result is returned.
    ///
    /// # Errors
    ///
    /// Returns [`HoldemError::RoundOver`] if the round is already at
    /// showdown, or [`HoldemError::Deck`] on an exhausted deck (impossible
    /// in valid play: a round consumes at most 9 cards).
    pub fn advance(&mut self) -> Result<StageAdvance, HoldemError> {
        let (next, deal) = match self.stage {
            Stage::Preflop => (Stage::Flop, 3),
            Stage::Flop => (Stage::Turn, 1),
            Stage::Turn => (Stage::River, 1),
            Stage::River => {
                self.stage = Stage::Showdown;
                return Ok(StageAdvance::Showdown(self.evaluate_showdown()));
            }
            Stage::Showdown => return Err(HoldemError::RoundOver),
        };

        for _ in 0..deal {
            self.community.push(self.deck.draw()?);
        }
        self.stage = next;

        Ok(StageAdvance::Dealt(next))
    }

    /// Evaluates the showdown.
    ///
    /// Valid only once the round has reached the showdown stage, i.e. all
    /// five community cards are out.
    ///
    /// # Errors
    ///
    /// Returns [`HoldemError::NotAtShowdown`] before the river has been
    /// passed.
    pub fn showdown(&self) -> Result<HoldemResult, HoldemError> {
        if self.stage != Stage::Showdown {
            return Err(HoldemError::NotAtShowdown);
        }
        Ok(self.evaluate_showdown())
    }

    fn evaluate_showdown(&self) -> HoldemResult {
        let player_eval = evaluate_hand(&self.player_hole, &self.community);
        let dealer_eval = evaluate_hand(&self.dealer_hole, &self.community);

        // Tier-only comparison: same-category hands always tie
        let (outcome, payout) = if player_eval.strength > dealer_eval.strength {
            (HoldemOutcome::Win, self.pot)
        } else if player_eval.strength < dealer_eval.strength {
            (HoldemOutcome::Loss, Amount::ZERO)
        } else {
            (HoldemOutcome::Tie, self.pot / 2)
        };

        HoldemResult {
            player_eval,
            dealer_eval,
            outcome,
            payout,
        }
    }

    /// Returns the player's hole cards.
    #[must_use]
    pub const fn player_hole(&self) -> &[Card; 2] {
        &self.player_hole
    }

    /// Returns the dealer's hole cards.
    #[must_use]
    pub const fn dealer_hole(&self) -> &[Card; 2] {
        &self.dealer_hole
    }

    /// Returns the community cards dealt so far (0, 3, 4, or 5).
    #[must_use]
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the pot.
    #[must_use]
    pub const fn pot(&self) -> Amount {
        self.pot
    }
}
