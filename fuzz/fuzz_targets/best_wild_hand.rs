#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate wild_poker;

use libfuzzer_sys::fuzz_target;

use wild_poker::core::{Card, CardIter};
use wild_poker::wild::{Pool, PoolItem};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub items: Vec<PoolItem>,
}

fuzz_target!(|input: Input| {
    // Most random inputs aren't valid pools, those have to be rejected
    // without panicking.
    let Ok(pool) = Pool::new(input.items) else {
        return;
    };

    let hand = pool.best_hand().unwrap();
    let rank = hand.rank();

    // The hand only uses pool cards or cards a joker can become.
    let real: Vec<Card> = pool.cards().collect();
    let jokers: Vec<_> = pool.jokers().collect();
    let mut used_jokers = 0;
    for card in hand.iter() {
        if !real.contains(card) {
            assert!(jokers.iter().any(|j| j.covers(card)));
            used_jokers += 1;
        }
    }
    assert!(used_jokers <= jokers.len());

    // No expansion has a better five cards.
    for cards in pool.expand() {
        for five in CardIter::<5>::new(&cards) {
            let other = wild_poker::core::rank_five(&five);
            assert!(other <= rank);
        }
    }
});
