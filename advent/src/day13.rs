//! Point of Incidence: reflection lines in ash and rock patterns.

use gridwalk_core::{Grid, ParseError};

use crate::error::PuzzleError;
use crate::runner::Solution;

pub const PART1_SMUDGES: usize = 0;
pub const PART2_SMUDGES: usize = 1;

/// Where a pattern folds onto itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    /// Between row `n - 1` and row `n`.
    AboveRow(i32),
    /// Between column `n - 1` and column `n`.
    LeftOfColumn(i32),
}

impl Mirror {
    pub fn summary(self) -> u64 {
        match self {
            Mirror::AboveRow(n) => 100 * n as u64,
            Mirror::LeftOfColumn(n) => n as u64,
        }
    }
}

/// The first fold `k` in `1..len` where the lines meeting across it differ
/// in exactly `smudges` cells in total. `diff(a, b)` counts the cells that
/// differ between lines `a` and `b`.
fn fold(len: i32, smudges: usize, diff: impl Fn(i32, i32) -> usize) -> Option<i32> {
    (1..len).find(|&k| {
        let reach = k.min(len - k);
        let mut total = 0;
        for i in 0..reach {
            total += diff(k - 1 - i, k + i);
            if total > smudges {
                return false;
            }
        }
        total == smudges
    })
}

/// A pattern's reflection with `smudges` cells flipped. Horizontal lines
/// take precedence.
pub fn find_mirror(pattern: &Grid<bool>, smudges: usize) -> Option<Mirror> {
    let rows = fold(pattern.height(), smudges, |a, b| {
        match (pattern.row(a), pattern.row(b)) {
            (Some(a), Some(b)) => a.iter().zip(b).filter(|(x, y)| x != y).count(),
            _ => usize::MAX,
        }
    });
    if let Some(n) = rows {
        return Some(Mirror::AboveRow(n));
    }
    fold(pattern.width(), smudges, |a, b| {
        pattern
            .column(a)
            .zip(pattern.column(b))
            .filter(|(x, y)| x != y)
            .count()
    })
    .map(Mirror::LeftOfColumn)
}

fn summarize(patterns: &[Grid<bool>], smudges: usize) -> Result<u64, PuzzleError> {
    patterns
        .iter()
        .enumerate()
        .map(|(i, p)| {
            find_mirror(p, smudges)
                .map(Mirror::summary)
                .ok_or(PuzzleError::NoReflection(i))
        })
        .sum()
}

pub struct Day13;

impl Solution for Day13 {
    const DAY: u8 = 13;
    const TITLE: &'static str = "Point of Incidence";
    type Input = Vec<Grid<bool>>;
    type Answer = u64;

    fn parse(text: &str) -> Result<Vec<Grid<bool>>, PuzzleError> {
        let mut patterns = Vec::new();
        let mut block = String::new();
        for line in text.lines().map(str::trim_end).chain(std::iter::once("")) {
            if !line.is_empty() {
                block.push_str(line);
                block.push('\n');
                continue;
            }
            if block.is_empty() {
                continue;
            }
            patterns.push(Grid::parse_with(&block, |c, _| match c {
                '#' => Some(true),
                '.' => Some(false),
                _ => None,
            })?);
            block.clear();
        }
        if patterns.is_empty() {
            return Err(ParseError::Empty.into());
        }
        log::debug!("{} patterns", patterns.len());
        Ok(patterns)
    }

    fn part1(patterns: &Vec<Grid<bool>>) -> Result<u64, PuzzleError> {
        summarize(patterns, PART1_SMUDGES)
    }

    fn part2(patterns: &Vec<Grid<bool>>) -> Result<u64, PuzzleError> {
        summarize(patterns, PART2_SMUDGES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATTERNS: &str = "\
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#
";

    #[test]
    fn example_mirrors() {
        let patterns = Day13::parse(PATTERNS).unwrap();
        assert_eq!(patterns.len(), 2);
        assert_eq!(find_mirror(&patterns[0], 0), Some(Mirror::LeftOfColumn(5)));
        assert_eq!(find_mirror(&patterns[1], 0), Some(Mirror::AboveRow(4)));
        assert_eq!(find_mirror(&patterns[0], 1), Some(Mirror::AboveRow(3)));
        assert_eq!(find_mirror(&patterns[1], 1), Some(Mirror::AboveRow(1)));
    }

    #[test]
    fn example_parts() {
        let patterns = Day13::parse(PATTERNS).unwrap();
        assert_eq!(Day13::part1(&patterns), Ok(405));
        assert_eq!(Day13::part2(&patterns), Ok(400));
    }

    #[test]
    fn smudged_line_is_not_a_clean_one() {
        // Rows 0 and 1 differ in one cell: a fold for part 2 only.
        let patterns = Day13::parse("#.\n##\n").unwrap();
        assert_eq!(find_mirror(&patterns[0], 1), Some(Mirror::AboveRow(1)));
        assert_eq!(find_mirror(&patterns[0], 0), None);
    }

    #[test]
    fn pattern_without_reflection() {
        let patterns = Day13::parse("#..\n.#.\n..#\n\n##\n..\n").unwrap();
        assert_eq!(patterns.len(), 2);
        assert_eq!(Day13::part1(&patterns), Err(PuzzleError::NoReflection(0)));
    }

    #[test]
    fn blank_runs_and_bad_cells() {
        assert_eq!(Day13::parse("\n\n#.\n\n\n.#\n\n").unwrap().len(), 2);
        assert!(Day13::parse("#x\n").is_err());
        assert_eq!(Day13::parse("\n\n"), Err(PuzzleError::Parse(ParseError::Empty)));
    }
}
