//! Pools with jokers.
//!
//! A black joker (`?B`) can stand for any club or spade, a red one (`?R`) for
//! any heart or diamond, as long as the card isn't already in the pool. The
//! best hand of a pool with jokers is the best hand over every joker free
//! pool it can stand for.

use tracing::{debug, instrument};

use crate::core::{Hand, PokerError};
use crate::select::{select_best, BestHand};

/// Jokers and pool items.
mod joker;
/// Export `Joker` and `PoolItem`
pub use self::joker::{Joker, PoolItem};

/// Pools of seven items.
mod pool;
/// Export `Pool`
pub use self::pool::Pool;

/// Turning jokers into real cards.
mod expand;
/// Export `Expansion` and `substitutes`
pub use self::expand::{substitutes, Expansion, MAX_SUBSTITUTES};

impl Pool {
    /// The best five cards this pool can make once the jokers are chosen.
    ///
    /// Ties keep the first hand found, walking the expansion in order.
    ///
    /// # Examples
    /// ```
    /// use wild_poker::wild::Pool;
    ///
    /// let pool: Pool = "6C 7C 8C 9C TC 5C ?B".parse().unwrap();
    /// let hand = pool.best_hand().unwrap();
    /// assert_eq!("7C 8C 9C TC JC", hand.to_string());
    /// ```
    #[instrument(level = "debug", skip(self), fields(pool = %self))]
    pub fn best_hand(&self) -> Result<Hand, PokerError> {
        let mut expansion = self.expand();
        let pools = expansion.len();

        let first = expansion
            .next()
            .ok_or(PokerError::TooFewCards(self.cards().count()))?;
        let mut best: BestHand = select_best(&first)?;
        for cards in expansion {
            best.challenge(select_best(&cards)?);
        }

        debug!(
            jokers = self.jokers().count(),
            pools,
            hand = %best.hand(),
            rank = ?best.rank(),
            "Picked best hand"
        );
        Ok(best.into_hand())
    }
}

/// `best_hand` for pools that can hold jokers.
///
/// The items are checked like [`Pool::new`] does.
///
/// # Examples
/// ```
/// use wild_poker::best_wild_hand;
/// use wild_poker::wild::PoolItem;
///
/// let items: Vec<PoolItem> = "TD TC 5H 5C 7C ?R ?B"
///     .split_whitespace()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let hand = best_wild_hand(&items).unwrap();
/// assert_eq!("TD TC 7C TH TS", hand.to_string());
/// ```
pub fn best_wild_hand(items: &[PoolItem]) -> Result<Hand, PokerError> {
    Pool::new(items.to_vec())?.best_hand()
}
