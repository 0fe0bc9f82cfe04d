use super::card::Card;

/// Given some cards create every group of `N` of them.
///
/// Groups come out in lexicographic order of their positions in the
/// source slice: for 7 cards choose 5 that's `[0, 1, 2, 3, 4]`,
/// `[0, 1, 2, 3, 5]`, ... `[2, 3, 4, 5, 6]`. Callers that keep the first
/// of several equal hands rely on this order.
#[derive(Debug, Clone)]
pub struct CardIter<'a, const N: usize> {
    /// All the possible cards that can be picked
    possible_cards: &'a [Card],

    /// Positions of the group that will be returned next.
    idx: [usize; N],

    /// Set once there are no more groups.
    done: bool,
}

impl<'a, const N: usize> CardIter<'a, N> {
    /// Create a new `CardIter` from a slice of cards.
    ///
    /// If there are fewer than `N` cards, or `N` is zero, the iterator is empty.
    pub fn new(possible_cards: &'a [Card]) -> Self {
        CardIter {
            possible_cards,
            idx: std::array::from_fn(|i| i),
            done: N == 0 || N > possible_cards.len(),
        }
    }

    fn current(&self) -> [Card; N] {
        self.idx.map(|i| self.possible_cards[i])
    }

    /// Move the positions forward one step. Returns false when the last
    /// group has already been handed out.
    fn advance(&mut self) -> bool {
        let len = self.possible_cards.len();
        // Find the right most position that still has room to move.
        let Some(level) = (0..N).rev().find(|&i| self.idx[i] < len - N + i) else {
            return false;
        };
        self.idx[level] += 1;
        for i in (level + 1)..N {
            self.idx[i] = self.idx[i - 1] + 1;
        }
        true
    }

    /// How many groups are still to come.
    fn remaining(&self) -> usize {
        if self.done {
            return 0;
        }
        // Count every group at or after the current one by summing,
        // for each level, the groups skipped by the positions after it.
        let len = self.possible_cards.len();
        let mut total = 1;
        for (level, &pos) in self.idx.iter().enumerate() {
            let rest = N - level - 1;
            let upper = len - rest;
            for p in (pos + 1)..upper {
                total += choose(len - p - 1, rest);
            }
        }
        total
    }
}

/// Plain binomial coefficient, small values only.
fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

impl<const N: usize> Iterator for CardIter<'_, N> {
    type Item = [Card; N];

    fn next(&mut self) -> Option<[Card; N]> {
        if self.done {
            return None;
        }
        let result = self.current();
        if !self.advance() {
            self.done = true;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<const N: usize> ExactSizeIterator for CardIter<'_, N> {}
