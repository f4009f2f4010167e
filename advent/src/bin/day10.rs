//! Day 10: Pipe Maze.
//!
//! Run next to an `input.txt`: cargo run --release --bin day10

use advent_lib::day10::Day10;
use advent_lib::runner;

fn main() -> anyhow::Result<()> {
    runner::run::<Day10>()
}
