//! Day 13: Point of Incidence.
//!
//! Run next to an `input.txt`: cargo run --release --bin day13

use advent_lib::day13::Day13;
use advent_lib::runner;

fn main() -> anyhow::Result<()> {
    runner::run::<Day13>()
}
