//! Day 18: Lavaduct Lagoon.
//!
//! Run next to an `input.txt`: cargo run --release --bin day18

use advent_lib::day18::Day18;
use advent_lib::runner;

fn main() -> anyhow::Result<()> {
    runner::run::<Day18>()
}
