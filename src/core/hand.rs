use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use super::card::{ensure_distinct, parse_cards, Card};
use super::error::PokerError;
use super::rank::{rank_five, HandRank};

/// Exactly five distinct cards. Jokers never make it into a `Hand`,
/// they have to be resolved to real cards first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Card>", into = "Vec<Card>"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    /// Number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Create a hand checking that no card is repeated.
    pub fn new(cards: [Card; 5]) -> Result<Self, PokerError> {
        ensure_distinct(&cards)?;
        Ok(Self { cards })
    }

    /// Wrap cards that were taken from an already checked pool.
    pub(crate) fn from_distinct(cards: [Card; 5]) -> Self {
        debug_assert!(ensure_distinct(&cards).is_ok());
        Self { cards }
    }

    /// The cards in the order they were given.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// Rank this hand.
    pub fn rank(&self) -> HandRank {
        rank_five(&self.cards)
    }

    /// The cards sorted lowest first. Handy when comparing hands
    /// that were picked in different orders.
    pub fn sorted(&self) -> [Card; 5] {
        let mut cards = self.cards;
        cards.sort();
        cards
    }
}

impl Deref for Hand {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = PokerError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; 5] = cards
            .try_into()
            .map_err(|_| PokerError::InvalidHandSize(cards.len()))?;
        Self::new(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = PokerError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::try_from(&cards[..])
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards.to_vec()
    }
}

impl FromStr for Hand {
    type Err = PokerError;

    /// Parse five whitespace separated cards, e.g. `"6C 7C 8C 9C TC"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Self::try_from(&cards[..])
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
