//! Picking the best five cards out of a bigger set.
//!
//! Every group of five is ranked and the best one is kept. When two groups
//! rank the same the one seen first stays, so the order of [`CardIter`]
//! decides which of several equally good hands is returned.

use tracing::trace;

use crate::core::{ensure_distinct, Card, CardIter, Hand, HandRank, PokerError};

/// Number of items in a pool.
pub const POOL_SIZE: usize = 7;

/// A hand together with its rank.
///
/// Serialized as just the hand. The rank is worked out again when
/// deserializing so it always matches the cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Hand", into = "Hand"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestHand {
    hand: Hand,
    rank: HandRank,
}

impl BestHand {
    fn new(hand: Hand) -> Self {
        Self {
            rank: hand.rank(),
            hand,
        }
    }

    /// The five cards picked.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The rank of [`BestHand::hand`].
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// Replace this hand with `other` if `other` is strictly better.
    ///
    /// Returns true if there was a replacement. Ties keep the current hand.
    pub fn challenge(&mut self, other: BestHand) -> bool {
        if other.rank > self.rank {
            trace!(from = %self.hand, to = %other.hand, rank = ?other.rank, "New best hand");
            *self = other;
            true
        } else {
            false
        }
    }

    /// Drop the rank and keep the cards.
    pub fn into_hand(self) -> Hand {
        self.hand
    }
}

impl From<Hand> for BestHand {
    fn from(hand: Hand) -> Self {
        Self::new(hand)
    }
}

impl From<BestHand> for Hand {
    fn from(best: BestHand) -> Self {
        best.hand
    }
}

/// Rank every five card group of `cards` and keep the best.
///
/// The cards have to come from one deck, a repeated card is an error.
///
/// # Examples
/// ```
/// use wild_poker::core::{parse_cards, Category};
/// use wild_poker::select_best;
///
/// let cards = parse_cards("JD TC TH 7C 7D 7S 7H").unwrap();
/// let best = select_best(&cards).unwrap();
/// assert_eq!(Category::FourOfAKind, best.rank().category());
/// ```
pub fn select_best(cards: &[Card]) -> Result<BestHand, PokerError> {
    ensure_distinct(cards)?;
    let mut groups = CardIter::<5>::new(cards).map(|c| BestHand::new(Hand::from_distinct(c)));
    let mut best = groups
        .next()
        .ok_or(PokerError::TooFewCards(cards.len()))?;
    for candidate in groups {
        best.challenge(candidate);
    }
    Ok(best)
}

/// From a pool of 7 cards return the best 5 card hand.
///
/// The pool must hold exactly 7 cards with no card repeated.
///
/// # Examples
/// ```
/// use wild_poker::{best_hand, core::parse_cards};
///
/// let pool = parse_cards("TD TC TH 7C 7D 8C 8S").unwrap();
/// let hand = best_hand(&pool).unwrap();
/// assert_eq!("TD TC TH 8C 8S", hand.to_string());
/// ```
pub fn best_hand(cards: &[Card]) -> Result<Hand, PokerError> {
    if cards.len() != POOL_SIZE {
        return Err(PokerError::InvalidPoolSize(cards.len()));
    }
    select_best(cards).map(BestHand::into_hand)
}
