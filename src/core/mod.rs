/// card.rs has value, suit, color and card.
mod card;
/// Export `Card`, `Suit`, `Value` and `Color`
pub use self::card::{parse_cards, Card, Color, Suit, Value};
pub(crate) use self::card::ensure_distinct;

/// Errors for parsing and validating cards.
mod error;
/// Export `PokerError`
pub use self::error::PokerError;

/// A five card hand.
mod hand;
/// Export `Hand`
pub use self::hand::Hand;

/// Ranking a five card hand.
mod rank;
/// Export the hand ranks and the classifier.
pub use self::rank::{rank_five, Category, HandRank, Lead, RankKey};

/// Iterate over every fixed size group of some cards.
mod card_iter;
/// Export `CardIter`
pub use self::card_iter::CardIter;
