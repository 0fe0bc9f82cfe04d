//! `wild_poker` picks the best five card poker hand out of seven cards.
//!
//! Hands are ranked from high card up to five of a kind. Pools can hold a
//! black and a red joker, each standing for any card of its color that is
//! not already in the pool.
//!
//! ```
//! use wild_poker::{best_hand, best_wild_hand};
//! use wild_poker::core::parse_cards;
//! use wild_poker::wild::Pool;
//!
//! let cards = parse_cards("JD TC TH 7C 7D 7S 7H").unwrap();
//! assert_eq!("JD 7C 7D 7S 7H", best_hand(&cards).unwrap().to_string());
//!
//! let pool: Pool = "TD TC 5H 5C 7C ?R ?B".parse().unwrap();
//! assert_eq!("TD TC 7C TH TS", pool.best_hand().unwrap().to_string());
//! # let items = pool.items().to_vec();
//! # assert_eq!(pool.best_hand(), best_wild_hand(&items));
//! ```

/// Cards, hands and hand ranks.
pub mod core;

/// Picking the best hand out of more than five cards.
pub mod select;
pub use self::select::{best_hand, select_best, BestHand};

/// Pools with jokers.
pub mod wild;
pub use self::wild::best_wild_hand;
