use std::fmt;
use std::str::FromStr;

use crate::core::{Card, Color, PokerError};
use crate::select::POOL_SIZE;

use super::expand::Expansion;
use super::joker::{Joker, PoolItem};

/// Seven cards to pick a hand from, jokers allowed.
///
/// A pool is checked when it's built: it has exactly 7 items, no card
/// shows up twice and there is at most one joker of each color.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<PoolItem>", into = "Vec<PoolItem>"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pool {
    items: Vec<PoolItem>,
}

impl Pool {
    /// Number of items in a pool.
    pub const SIZE: usize = POOL_SIZE;

    /// Build a pool, rejecting anything a single deck with two jokers
    /// can't produce.
    ///
    /// # Examples
    /// ```
    /// use wild_poker::core::PokerError;
    /// use wild_poker::wild::{Joker, Pool, PoolItem};
    ///
    /// let mut items: Vec<PoolItem> = "TD TC 5H 5C 7C ?R"
    ///     .split_whitespace()
    ///     .map(|s| s.parse().unwrap())
    ///     .collect();
    /// items.push(PoolItem::Joker(Joker::BLACK));
    /// let pool = Pool::new(items).unwrap();
    /// assert_eq!(2, pool.jokers().count());
    ///
    /// assert_eq!(Err(PokerError::InvalidPoolSize(0)), Pool::new(vec![]));
    /// ```
    pub fn new(items: Vec<PoolItem>) -> Result<Self, PokerError> {
        if items.len() != Self::SIZE {
            return Err(PokerError::InvalidPoolSize(items.len()));
        }

        let jokers = items.iter().filter(|item| item.joker().is_some()).count();
        if jokers > 2 {
            return Err(PokerError::TooManyJokers(jokers));
        }

        let mut cards: Vec<Card> = Vec::with_capacity(Self::SIZE);
        let mut colors: Vec<Color> = Vec::with_capacity(2);
        for item in &items {
            match item {
                PoolItem::Card(card) => {
                    if cards.contains(card) {
                        return Err(PokerError::DuplicateCard(*card));
                    }
                    cards.push(*card);
                }
                PoolItem::Joker(joker) => {
                    if colors.contains(&joker.color) {
                        return Err(PokerError::DuplicateJoker(joker.color));
                    }
                    colors.push(joker.color);
                }
            }
        }

        Ok(Self { items })
    }

    /// Every item, in pool order.
    pub fn items(&self) -> &[PoolItem] {
        &self.items
    }

    /// The real cards, in pool order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.items.iter().filter_map(PoolItem::card)
    }

    /// The jokers, in pool order.
    pub fn jokers(&self) -> impl Iterator<Item = Joker> + '_ {
        self.items.iter().filter_map(PoolItem::joker)
    }

    /// Every joker free pool this one can stand for.
    ///
    /// Each call starts a fresh iterator.
    pub fn expand(&self) -> Expansion {
        Expansion::new(self.cards().collect(), self.jokers().collect())
    }
}

impl TryFrom<Vec<PoolItem>> for Pool {
    type Error = PokerError;

    fn try_from(items: Vec<PoolItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<Pool> for Vec<PoolItem> {
    fn from(pool: Pool) -> Self {
        pool.items
    }
}

impl FromStr for Pool {
    type Err = PokerError;

    /// Parse whitespace separated cards and jokers, e.g.
    /// `"6C 7C 8C 9C TC 5C ?B"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let items = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<PoolItem>, _>>()?;
        Self::new(items)
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
