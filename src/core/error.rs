use thiserror::Error;

use super::card::{Card, Color};

/// Errors returned while parsing cards or building hands and pools.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PokerError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Unable to parse joker color")]
    UnexpectedColorChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extraneous trailing characters encountered")]
    UnparsedCharsRemaining,
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("More than one {0} joker")]
    DuplicateJoker(Color),
    #[error("A pool can hold at most two jokers, found {0}")]
    TooManyJokers(usize),
    #[error("A pool must hold exactly 7 items, found {0}")]
    InvalidPoolSize(usize),
    #[error("At least 5 cards are needed to pick a hand, found {0}")]
    TooFewCards(usize),
    #[error("A hand must hold exactly 5 cards, found {0}")]
    InvalidHandSize(usize),
}
