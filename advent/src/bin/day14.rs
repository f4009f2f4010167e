//! Day 14: Parabolic Reflector Dish.
//!
//! Run next to an `input.txt`: cargo run --release --bin day14

use advent_lib::day14::Day14;
use advent_lib::runner;

fn main() -> anyhow::Result<()> {
    runner::run::<Day14>()
}
