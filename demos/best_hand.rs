//! Print the best hand for pools given on the command line.
//!
//! ```bash
//! cargo run --example best_hand -- "6C 7C 8C 9C TC 5C ?B" "TD TC 5H 5C 7C ?R ?B"
//! ```
//!
//! Set `RUST_LOG=wild_poker=debug` to see how many pools each joker
//! expansion ranked.
use tracing_subscriber::EnvFilter;
use wild_poker::wild::Pool;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pools: Vec<String> = std::env::args().skip(1).collect();
    if pools.is_empty() {
        eprintln!("usage: best_hand \"<7 cards or jokers>\" ...");
        std::process::exit(2);
    }

    let mut failed = false;
    for arg in &pools {
        match arg.parse::<Pool>().and_then(|pool| pool.best_hand()) {
            Ok(hand) => {
                let rank = hand.rank();
                println!("{arg} => {hand} ({:?})", rank.category());
            }
            Err(e) => {
                eprintln!("{arg}: {e}");
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}
