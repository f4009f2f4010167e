//! Day 12: Hot Springs.
//!
//! Run next to an `input.txt`: cargo run --release --bin day12

use advent_lib::day12::Day12;
use advent_lib::runner;

fn main() -> anyhow::Result<()> {
    runner::run::<Day12>()
}
