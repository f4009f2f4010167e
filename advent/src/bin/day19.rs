//! Day 19: Aplenty.
//!
//! Run next to an `input.txt`: cargo run --release --bin day19

use advent_lib::day19::Day19;
use advent_lib::runner;

fn main() -> anyhow::Result<()> {
    runner::run::<Day19>()
}
