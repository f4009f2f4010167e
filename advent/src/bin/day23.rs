//! Day 23: A Long Walk.
//!
//! Run next to an `input.txt`: cargo run --release --bin day23

use advent_lib::day23::Day23;
use advent_lib::runner;

fn main() -> anyhow::Result<()> {
    runner::run::<Day23>()
}
