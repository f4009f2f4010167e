//! Day 17: Clumsy Crucible.
//!
//! Run next to an `input.txt`: cargo run --release --bin day17

use advent_lib::day17::Day17;
use advent_lib::runner;

fn main() -> anyhow::Result<()> {
    runner::run::<Day17>()
}
