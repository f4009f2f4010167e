//! Day 16: The Floor Will Be Lava.
//!
//! Run next to an `input.txt`: cargo run --release --bin day16

use advent_lib::day16::Day16;
use advent_lib::runner;

fn main() -> anyhow::Result<()> {
    runner::run::<Day16>()
}
