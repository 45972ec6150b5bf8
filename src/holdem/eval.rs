//! Simplified 7-card hand categorization.
//!
//! Detection runs over the full 7-card set rather than the best 5-of-7:
//! a flush is any suit seen 5+ times among the 7 cards, a straight is any
//! 5 consecutive distinct ranks (ace high only, no wheel), and comparison
//! uses only the coarse category tier, so two hands in the same category
//! always tie regardless of pair ranks or kickers. These are deliberate,
//! documented simplifications, not bugs to fix.

use crate::card::{Card, Suit};

/// Poker hand category, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No made hand; plays the highest card.
    HighCard,
    /// One pair.
    Pair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five or more cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight and flush together.
    StraightFlush,
    /// Straight flush with an ace present.
    RoyalFlush,
}

impl HandCategory {
    /// Human-readable category name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::Pair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

/// A categorized 7-card hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PokerHandEvaluation {
    /// The detected category.
    pub category: HandCategory,
    /// Coarse comparable strength: a fixed tier per category, or the top
    /// rank value for a high card. Comparison uses this value alone.
    pub strength: u32,
}

impl PokerHandEvaluation {
    /// Human-readable category name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.category.name()
    }
}

fn any_suit_flush(cards: &[Card]) -> bool {
    let mut counts = [0u8; 4];
    for card in cards {
        let index = match card.suit {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        };
        counts[index] += 1;
    }
    counts.iter().any(|&count| count >= 5)
}

/// Evaluates a player's 2 hole cards against the 5 community cards.
///
/// Expects 7 well-formed cards in total; the function is total over them
/// and never fails.
#[must_use]
pub fn evaluate_hand(hole: &[Card], community: &[Card]) -> PokerHandEvaluation {
    let mut cards = Vec::with_capacity(hole.len() + community.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(community);

    // Rank histogram over poker values 2..=14
    let mut rank_counts = [0u8; 15];
    let mut top_rank: u8 = 0;
    for card in &cards {
        let value = card.poker_value();
        rank_counts[value as usize] += 1;
        top_rank = top_rank.max(value);
    }

    // Multiplicities, largest first
    let mut counts: Vec<u8> = rank_counts.iter().copied().filter(|&c| c > 0).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    let top_count = counts.first().copied().unwrap_or(0);
    let second_count = counts.get(1).copied().unwrap_or(0);

    let is_flush = any_suit_flush(&cards);

    // Any 5 consecutive distinct ranks, ace high only
    let mut is_straight = false;
    for low in 2..=10usize {
        if (low..low + 5).all(|rank| rank_counts[rank] > 0) {
            is_straight = true;
        }
    }

    let has_ace = rank_counts[14] > 0;

    let (category, strength) = if is_straight && is_flush {
        if has_ace {
            (HandCategory::RoyalFlush, 9000)
        } else {
            (HandCategory::StraightFlush, 9000)
        }
    } else if top_count == 4 {
        (HandCategory::FourOfAKind, 8000)
    } else if top_count == 3 && second_count == 2 {
        (HandCategory::FullHouse, 7000)
    } else if is_flush {
        (HandCategory::Flush, 6000)
    } else if is_straight {
        (HandCategory::Straight, 5000)
    } else if top_count == 3 {
        (HandCategory::ThreeOfAKind, 4000)
    } else if top_count == 2 && second_count == 2 {
        (HandCategory::TwoPair, 3000)
    } else if top_count == 2 {
        (HandCategory::Pair, 2000)
    } else {
        (HandCategory::HighCard, u32::from(top_rank))
    };

    PokerHandEvaluation { category, strength }
}
