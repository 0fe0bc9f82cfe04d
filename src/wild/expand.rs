use crate::core::{Card, Color, Value};
use crate::select::POOL_SIZE;

use super::joker::Joker;

/// How many cards a joker could become before removing the ones already
/// in the pool: 13 values for each of the 2 suits of its color.
pub const MAX_SUBSTITUTES: usize = 26;

/// Every card a joker of `color` can become without repeating a card of
/// `fixed`.
///
/// Cards come value first, `2C 2S 3C 3S ...` for black and
/// `2H 2D 3H 3D ...` for red.
///
/// ```
/// use wild_poker::core::{parse_cards, Color};
/// use wild_poker::wild::substitutes;
///
/// let fixed = parse_cards("2C 3S AH").unwrap();
/// assert_eq!(24, substitutes(Color::Black, &fixed).count());
/// assert_eq!(25, substitutes(Color::Red, &fixed).count());
/// ```
pub fn substitutes(color: Color, fixed: &[Card]) -> impl Iterator<Item = Card> + '_ {
    Value::values()
        .into_iter()
        .flat_map(move |value| {
            color
                .suits()
                .into_iter()
                .map(move |suit| Card::new(value, suit))
        })
        .filter(move |card| !fixed.contains(card))
}

/// Iterator over the joker free pools a pool with jokers stands for.
///
/// Each pool is the real cards in their original order followed by one
/// substitute per joker, in joker order. The last joker moves fastest, so
/// with two jokers the first one is the outer loop.
///
/// Substitutes never repeat a real card, and two jokers have different
/// colors so they can't pick the same card either.
#[derive(Debug, Clone)]
pub struct Expansion {
    /// The real cards of the pool.
    fixed: Vec<Card>,
    /// For each joker the cards it can still become.
    candidates: Vec<Vec<Card>>,
    /// For each joker the position in `candidates` of the next pool.
    positions: Vec<usize>,
    done: bool,
}

impl Expansion {
    pub(crate) fn new(fixed: Vec<Card>, jokers: Vec<Joker>) -> Self {
        let candidates: Vec<Vec<Card>> = jokers
            .iter()
            .map(|joker| substitutes(joker.color, &fixed).collect())
            .collect();
        let done = fixed.len() + jokers.len() != POOL_SIZE
            || candidates.iter().any(|cards| cards.is_empty());
        Self {
            positions: vec![0; candidates.len()],
            fixed,
            candidates,
            done,
        }
    }

    fn current(&self) -> Option<[Card; POOL_SIZE]> {
        let cards: Vec<Card> = self
            .fixed
            .iter()
            .copied()
            .chain(
                self.positions
                    .iter()
                    .zip(&self.candidates)
                    .map(|(&pos, cards)| cards[pos]),
            )
            .collect();
        cards.try_into().ok()
    }

    /// Step the last joker forward, carrying into the ones before it.
    fn advance(&mut self) -> bool {
        for level in (0..self.positions.len()).rev() {
            if self.positions[level] + 1 < self.candidates[level].len() {
                self.positions[level] += 1;
                for pos in &mut self.positions[level + 1..] {
                    *pos = 0;
                }
                return true;
            }
        }
        false
    }

    fn remaining(&self) -> usize {
        if self.done {
            return 0;
        }
        let mut total = 1;
        let mut seen = 0;
        for (cards, &pos) in self.candidates.iter().zip(&self.positions) {
            total *= cards.len();
            seen = seen * cards.len() + pos;
        }
        total - seen
    }
}

impl Iterator for Expansion {
    type Item = [Card; POOL_SIZE];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let pool = self.current();
        self.done = pool.is_none() || !self.advance();
        pool
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Expansion {}
