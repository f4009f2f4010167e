//! Day 3: Gear Ratios.
//!
//! Run next to an `input.txt`: cargo run --release --bin day03

use advent_lib::day03::Day03;
use advent_lib::runner;

fn main() -> anyhow::Result<()> {
    runner::run::<Day03>()
}
