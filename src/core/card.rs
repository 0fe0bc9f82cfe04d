use std::fmt;
use std::str::FromStr;

use super::error::PokerError;

/// Card rank or value.
/// This is basically the face value - 2
///
/// The discriminant is the order preserving rank value, so
/// `Value::Two as u8 == 0` and `Value::Ace as u8 == 12`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    ///
    /// ```
    /// use wild_poker::core::Value;
    ///
    /// let values = Value::values();
    /// assert_eq!(Value::Two, values[0]);
    /// assert_eq!(Value::Ace, values[12]);
    /// ```
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// The order preserving rank value, 0 for a two up to 12 for an ace.
    pub fn rank_value(self) -> u8 {
        self as u8
    }

    /// Take a u8 rank value and convert it into a `Value`.
    /// Anything above 12 is not a card value.
    pub fn from_u8(v: u8) -> Option<Self> {
        VALUES.get(v as usize).copied()
    }

    /// Given a character parse that char into a value.
    /// Case is ignored.
    ///
    /// ```
    /// use wild_poker::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(Some(Value::Ten), Value::from_char('t'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }
}

/// The color of a suit. Jokers only carry a color.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Color {
    /// Clubs and spades
    Black,
    /// Hearts and diamonds
    Red,
}

impl Color {
    /// The two suits of this color in notation order.
    ///
    /// ```
    /// use wild_poker::core::{Color, Suit};
    ///
    /// assert_eq!([Suit::Club, Suit::Spade], Color::Black.suits());
    /// assert_eq!([Suit::Heart, Suit::Diamond], Color::Red.suits());
    /// ```
    pub const fn suits(self) -> [Suit; 2] {
        match self {
            Self::Black => [Suit::Club, Suit::Spade],
            Self::Red => [Suit::Heart, Suit::Diamond],
        }
    }

    /// Parse the color letter used by joker tokens, `B` or `R`.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'B' => Some(Self::Black),
            'R' => Some(Self::Red),
            _ => None,
        }
    }

    /// The color letter, the inverse of `from_char`.
    pub fn to_char(self) -> char {
        match self {
            Self::Black => 'B',
            Self::Red => 'R',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => write!(f, "black"),
            Self::Red => write!(f, "red"),
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Spades
    Spade = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Spade, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Given a character that represents a suit try and parse that char.
    /// If the char can represent a suit return it.
    ///
    /// ```
    /// use wild_poker::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Spade), Suit::from_char('S'));
    /// assert_eq!(Some(Suit::Diamond), Suit::from_char('d'));
    /// assert_eq!(None, Suit::from_char('X'));
    /// ```
    pub fn from_char(s: char) -> Option<Self> {
        match s.to_ascii_uppercase() {
            'C' => Some(Self::Club),
            'S' => Some(Self::Spade),
            'H' => Some(Self::Heart),
            'D' => Some(Self::Diamond),
            _ => None,
        }
    }

    /// This Suit to a character.
    pub fn to_char(self) -> char {
        match self {
            Self::Club => 'C',
            Self::Spade => 'S',
            Self::Heart => 'H',
            Self::Diamond => 'D',
        }
    }

    /// Which color a suit belongs to.
    pub const fn color(self) -> Color {
        match self {
            Self::Club | Self::Spade => Color::Black,
            Self::Heart | Self::Diamond => Color::Red,
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Ordering is by value first and then by suit, which makes
/// sorted cards read nicely but has no poker meaning.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Number of cards in a standard deck.
    pub const DECK_SIZE: usize = 52;

    /// Create a card from its value and suit.
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// The color of this card's suit.
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Every card of a standard 52 card deck, grouped by suit.
    ///
    /// ```
    /// use wild_poker::core::Card;
    ///
    /// assert_eq!(52, Card::deck().count());
    /// ```
    pub fn deck() -> impl Iterator<Item = Card> {
        SUITS
            .into_iter()
            .flat_map(|suit| VALUES.into_iter().map(move |value| Card::new(value, suit)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = PokerError;

    /// Parse a two character token like `"TC"` or `"as"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let value = chars
            .next()
            .ok_or(PokerError::TooFewChars)
            .and_then(|c| Value::from_char(c).ok_or(PokerError::UnexpectedValueChar))?;
        let suit = chars
            .next()
            .ok_or(PokerError::TooFewChars)
            .and_then(|c| Suit::from_char(c).ok_or(PokerError::UnexpectedSuitChar))?;

        if chars.next().is_some() {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        Ok(Self { value, suit })
    }
}

/// Parse whitespace separated card tokens.
///
/// ```
/// use wild_poker::core::{parse_cards, Card, Suit, Value};
///
/// let cards = parse_cards("6C 7C 8C").unwrap();
/// assert_eq!(3, cards.len());
/// assert_eq!(Card::new(Value::Eight, Suit::Club), cards[2]);
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, PokerError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Find the first card that shows up twice.
///
/// This is the single deck rule. It's checked explicitly wherever
/// cards come from the caller.
pub(crate) fn ensure_distinct(cards: &[Card]) -> Result<(), PokerError> {
    for (idx, card) in cards.iter().enumerate() {
        if cards[..idx].contains(card) {
            return Err(PokerError::DuplicateCard(*card));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_constructor() {
        let c = Card {
            value: Value::Three,
            suit: Suit::Spade,
        };
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_rank_value_is_order_preserving() {
        let values = Value::values();
        for (idx, pair) in values.windows(2).enumerate() {
            assert!(pair[0] < pair[1]);
            assert_eq!(idx as u8, pair[0].rank_value());
        }
        assert_eq!(12, Value::Ace as u8);
        assert_eq!(Some(Value::Queen), Value::from_u8(10));
        assert_eq!(None, Value::from_u8(13));
    }

    #[test]
    fn test_value_char_round_trip() {
        for v in Value::values() {
            assert_eq!(Some(v), Value::from_char(v.to_char()));
        }
        assert_eq!(None, Value::from_char('1'));
        assert_eq!(None, Value::from_char('?'));
    }

    #[test]
    fn test_suit_colors() {
        assert_eq!(Color::Black, Suit::Club.color());
        assert_eq!(Color::Black, Suit::Spade.color());
        assert_eq!(Color::Red, Suit::Heart.color());
        assert_eq!(Color::Red, Suit::Diamond.color());

        for color in [Color::Black, Color::Red] {
            for s in color.suits() {
                assert_eq!(color, s.color());
            }
        }
    }

    #[test]
    fn test_color_chars() {
        assert_eq!(Some(Color::Black), Color::from_char('B'));
        assert_eq!(Some(Color::Red), Color::from_char('r'));
        assert_eq!(None, Color::from_char('G'));
        assert_eq!('R', Color::Red.to_char());
    }

    #[test]
    fn test_parse_card() {
        let c: Card = "TC".parse().unwrap();
        assert_eq!(Card::new(Value::Ten, Suit::Club), c);
        assert_eq!("TC", c.to_string());

        let c: Card = "ah".parse().unwrap();
        assert_eq!("AH", c.to_string());
    }

    #[test]
    fn test_parse_card_errors() {
        assert_eq!(Err(PokerError::TooFewChars), "".parse::<Card>());
        assert_eq!(Err(PokerError::TooFewChars), "A".parse::<Card>());
        assert_eq!(Err(PokerError::UnexpectedValueChar), "1C".parse::<Card>());
        assert_eq!(Err(PokerError::UnexpectedSuitChar), "AX".parse::<Card>());
        assert_eq!(
            Err(PokerError::UnparsedCharsRemaining),
            "ACS".parse::<Card>()
        );
    }

    #[test]
    fn test_deck_is_unique() {
        let deck: HashSet<Card> = Card::deck().collect();
        assert_eq!(Card::DECK_SIZE, deck.len());
        for card in Card::deck() {
            assert_eq!(card, card.to_string().parse().unwrap());
        }
    }

    #[test]
    fn test_parse_cards() {
        let cards = parse_cards("6C 7C  8C\t9C").unwrap();
        assert_eq!(4, cards.len());
        assert_eq!(Err(PokerError::UnexpectedValueChar), parse_cards("6C ?B"));
    }

    #[test]
    fn test_ensure_distinct() {
        let cards = parse_cards("6C 7C 8C").unwrap();
        assert_eq!(Ok(()), ensure_distinct(&cards));

        let cards = parse_cards("6C 7C 6C").unwrap();
        assert_eq!(
            Err(PokerError::DuplicateCard(Card::new(Value::Six, Suit::Club))),
            ensure_distinct(&cards)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let c = Card::new(Value::King, Suit::Heart);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(c, serde_json::from_str::<Card>(&json).unwrap());
    }
}
