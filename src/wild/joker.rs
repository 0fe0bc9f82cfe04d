use std::fmt;
use std::str::FromStr;

use crate::core::{Card, Color, PokerError};

/// A wild card. It stands for any card of its color.
///
/// A deck has one black and one red joker, written `?B` and `?R`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Joker {
    /// The color of the cards this joker can become.
    pub color: Color,
}

impl Joker {
    /// The joker for clubs and spades.
    pub const BLACK: Joker = Joker {
        color: Color::Black,
    };
    /// The joker for hearts and diamonds.
    pub const RED: Joker = Joker { color: Color::Red };

    /// Can this joker stand in for `card`.
    pub fn covers(&self, card: &Card) -> bool {
        card.color() == self.color
    }
}

impl fmt::Display for Joker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.color.to_char())
    }
}

impl FromStr for Joker {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match chars.next() {
            Some('?') => {}
            Some(_) => return Err(PokerError::UnexpectedValueChar),
            None => return Err(PokerError::TooFewChars),
        }
        let color = chars
            .next()
            .ok_or(PokerError::TooFewChars)
            .and_then(|c| Color::from_char(c).ok_or(PokerError::UnexpectedColorChar))?;
        if chars.next().is_some() {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        Ok(Joker { color })
    }
}

/// One slot of a pool: a real card or a joker.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum PoolItem {
    Card(Card),
    Joker(Joker),
}

impl PoolItem {
    /// The card, if this slot isn't a joker.
    pub fn card(&self) -> Option<Card> {
        match self {
            PoolItem::Card(card) => Some(*card),
            PoolItem::Joker(_) => None,
        }
    }

    /// The joker, if this slot isn't a real card.
    pub fn joker(&self) -> Option<Joker> {
        match self {
            PoolItem::Card(_) => None,
            PoolItem::Joker(joker) => Some(*joker),
        }
    }
}

impl From<Card> for PoolItem {
    fn from(card: Card) -> Self {
        PoolItem::Card(card)
    }
}

impl From<Joker> for PoolItem {
    fn from(joker: Joker) -> Self {
        PoolItem::Joker(joker)
    }
}

impl fmt::Display for PoolItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolItem::Card(card) => fmt::Display::fmt(card, f),
            PoolItem::Joker(joker) => fmt::Display::fmt(joker, f),
        }
    }
}

impl FromStr for PoolItem {
    type Err = PokerError;

    /// Parse `"TC"` as a card and `"?R"` as a joker.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('?') {
            s.parse().map(PoolItem::Joker)
        } else {
            s.parse().map(PoolItem::Card)
        }
    }
}
