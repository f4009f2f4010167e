//! Shared entry point for the per-day binaries.
//!
//! Every binary reads [`INPUT_FILE`] from the working directory, prints a
//! [`Report`] to stdout, and logs to stderr at the level named by
//! [`LOG_ENV`].

use std::fmt;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::LevelFilter;

use crate::error::PuzzleError;

/// Fixed name of the puzzle input, relative to the working directory.
pub const INPUT_FILE: &str = "input.txt";

/// Environment variable holding the log level (`error` … `trace`).
pub const LOG_ENV: &str = "GRIDWALK_LOG";

/// One day's puzzle: a parser and two answers.
pub trait Solution {
    const DAY: u8;
    const TITLE: &'static str;

    /// Parsed form of the input, shared by both parts.
    type Input;
    type Answer: fmt::Display;

    fn parse(text: &str) -> Result<Self::Input, PuzzleError>;
    fn part1(input: &Self::Input) -> Result<Self::Answer, PuzzleError>;
    fn part2(input: &Self::Input) -> Result<Self::Answer, PuzzleError>;
}

/// Both answers of a solved day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub day: u8,
    pub title: &'static str,
    pub part1: String,
    pub part2: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Day {:02}: {}", self.day, self.title)?;
        writeln!(f, "Part 1: {}", self.part1)?;
        writeln!(f, "Part 2: {}", self.part2)
    }
}

/// Parse `text` and compute both parts.
pub fn solve<S: Solution>(text: &str) -> Result<Report, PuzzleError> {
    let started = Instant::now();
    let input = S::parse(text)?;
    log::debug!("day {}: parsed in {:?}", S::DAY, started.elapsed());

    let part1 = S::part1(&input)?.to_string();
    log::debug!("day {}: part 1 done at {:?}", S::DAY, started.elapsed());
    let part2 = S::part2(&input)?.to_string();
    log::debug!("day {}: part 2 done at {:?}", S::DAY, started.elapsed());

    Ok(Report {
        day: S::DAY,
        title: S::TITLE,
        part1,
        part2,
    })
}

/// Read the input file.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read puzzle input from {}", path.display()))
}

/// Log level named by `value`, falling back to `Info`.
pub fn log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger.
pub fn init_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

/// Entry point shared by the binaries.
pub fn run<S: Solution>() -> anyhow::Result<()> {
    let level = log_level(std::env::var(LOG_ENV).ok().as_deref());
    init_logging(level)?;

    let text = read_input(Path::new(INPUT_FILE))?;
    let report = solve::<S>(&text).with_context(|| format!("day {} failed", S::DAY))?;
    print!("{report}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use gridwalk_core::ParseError;

    use super::*;

    struct Echo;

    impl Solution for Echo {
        const DAY: u8 = 1;
        const TITLE: &'static str = "Echo";
        type Input = Vec<u32>;
        type Answer = u32;

        fn parse(text: &str) -> Result<Vec<u32>, PuzzleError> {
            text.lines()
                .enumerate()
                .map(|(i, l)| {
                    l.parse::<u32>()
                        .map_err(|_| PuzzleError::from(ParseError::line(i, "not a number")))
                })
                .collect()
        }

        fn part1(input: &Vec<u32>) -> Result<u32, PuzzleError> {
            Ok(input.iter().sum())
        }

        fn part2(input: &Vec<u32>) -> Result<u32, PuzzleError> {
            Ok(input.iter().copied().max().unwrap_or(0))
        }
    }

    #[test]
    fn report_layout() {
        let report = solve::<Echo>("3\n4\n").unwrap();
        assert_eq!(report.to_string(), "Day 01: Echo\nPart 1: 7\nPart 2: 4\n");
    }

    #[test]
    fn parse_errors_surface() {
        let err = solve::<Echo>("3\nx\n").unwrap_err();
        assert_eq!(
            err,
            PuzzleError::Parse(ParseError::InvalidLine {
                line: 2,
                reason: "not a number".into(),
            })
        );
    }

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(log_level(None), LevelFilter::Info);
        assert_eq!(log_level(Some("nonsense")), LevelFilter::Info);
        assert_eq!(log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(log_level(Some(" TRACE ")), LevelFilter::Trace);
    }

    #[test]
    fn missing_input_names_the_path() {
        let err = read_input(Path::new("no/such/dir/input.txt")).unwrap_err();
        assert!(err.to_string().contains("no/such/dir/input.txt"));
    }
}
