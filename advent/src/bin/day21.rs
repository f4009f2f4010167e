//! Day 21: Step Counter.
//!
//! Run next to an `input.txt`: cargo run --release --bin day21

use advent_lib::day21::Day21;
use advent_lib::runner;

fn main() -> anyhow::Result<()> {
    runner::run::<Day21>()
}
