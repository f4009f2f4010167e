//! Day 11: Cosmic Expansion.
//!
//! Run next to an `input.txt`: cargo run --release --bin day11

use advent_lib::day11::Day11;
use advent_lib::runner;

fn main() -> anyhow::Result<()> {
    runner::run::<Day11>()
}
