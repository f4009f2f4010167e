//! Hot Springs: counting the ways damaged springs fit a group record.
//!
//! `ways[i][j]` is the number of arrangements of `springs[i..]` that
//! complete groups `j..`. It is filled from the right, so each row only
//! reads rows further along.

use gridwalk_core::ParseError;

use crate::error::PuzzleError;
use crate::runner::Solution;

/// Copies of each record laid end to end in part 2.
pub const UNFOLD: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spring {
    Operational,
    Damaged,
    Unknown,
}

impl Spring {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Spring::Operational),
            '#' => Some(Spring::Damaged),
            '?' => Some(Spring::Unknown),
            _ => None,
        }
    }
}

/// One condition record: the springs and the sizes of their damaged runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub springs: Vec<Spring>,
    pub groups: Vec<usize>,
}

impl Record {
    fn parse(index: usize, line: &str) -> Result<Self, ParseError> {
        let (springs, groups) = line
            .split_once(' ')
            .ok_or_else(|| ParseError::line(index, "expected springs and group sizes"))?;
        let springs = springs
            .chars()
            .map(Spring::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| ParseError::line(index, "unknown spring symbol"))?;
        let groups = groups
            .trim()
            .split(',')
            .map(|g| g.parse().ok().filter(|&n| n > 0))
            .collect::<Option<Vec<usize>>>()
            .ok_or_else(|| ParseError::line(index, "group sizes must be positive integers"))?;
        Ok(Self { springs, groups })
    }

    /// `copies` copies of the springs joined by unknowns, and the groups
    /// repeated as often.
    pub fn unfold(&self, copies: usize) -> Self {
        let mut springs = Vec::with_capacity((self.springs.len() + 1) * copies);
        for i in 0..copies {
            if i > 0 {
                springs.push(Spring::Unknown);
            }
            springs.extend_from_slice(&self.springs);
        }
        Self {
            springs,
            groups: self.groups.repeat(copies),
        }
    }

    /// Number of ways to resolve the unknowns so that the damaged runs
    /// match `groups` exactly.
    pub fn arrangements(&self) -> u64 {
        let n = self.springs.len();
        let g = self.groups.len();

        // operational_before[i] counts operational springs in springs[..i].
        let mut operational_before = vec![0usize; n + 1];
        for (i, &s) in self.springs.iter().enumerate() {
            operational_before[i + 1] = operational_before[i] + (s == Spring::Operational) as usize;
        }

        let mut ways = vec![vec![0u64; g + 1]; n + 1];
        ways[n][g] = 1;
        for i in (0..n).rev() {
            for j in 0..=g {
                let spring = self.springs[i];
                let mut total = 0;
                if spring != Spring::Damaged {
                    total += ways[i + 1][j];
                }
                if spring != Spring::Operational && j < g {
                    let end = i + self.groups[j];
                    let fits = end <= n
                        && operational_before[end] == operational_before[i]
                        && self.springs.get(end) != Some(&Spring::Damaged);
                    if fits {
                        // Skip the separator after the group, if any.
                        total += ways[(end + 1).min(n)][j + 1];
                    }
                }
                ways[i][j] = total;
            }
        }
        ways[0][0]
    }
}

pub struct Day12;

impl Solution for Day12 {
    const DAY: u8 = 12;
    const TITLE: &'static str = "Hot Springs";
    type Input = Vec<Record>;
    type Answer = u64;

    fn parse(text: &str) -> Result<Vec<Record>, PuzzleError> {
        let records = text
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .map(|(i, l)| Record::parse(i, l.trim()))
            .collect::<Result<Vec<_>, _>>()?;
        if records.is_empty() {
            return Err(ParseError::Empty.into());
        }
        Ok(records)
    }

    fn part1(records: &Vec<Record>) -> Result<u64, PuzzleError> {
        Ok(records.iter().map(Record::arrangements).sum())
    }

    fn part2(records: &Vec<Record>) -> Result<u64, PuzzleError> {
        Ok(records.iter().map(|r| r.unfold(UNFOLD).arrangements()).sum())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use super::*;

    const RECORDS: &str = "\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

    /// Try every assignment of the unknowns.
    fn brute_force(record: &Record) -> u64 {
        let unknown: Vec<usize> = (0..record.springs.len())
            .filter(|&i| record.springs[i] == Spring::Unknown)
            .collect();
        let mut count = 0;
        for mask in 0u32..1 << unknown.len() {
            let mut springs = record.springs.clone();
            for (bit, &i) in unknown.iter().enumerate() {
                springs[i] = if mask >> bit & 1 == 1 {
                    Spring::Damaged
                } else {
                    Spring::Operational
                };
            }
            let runs: Vec<usize> = springs
                .split(|&s| s == Spring::Operational)
                .map(<[Spring]>::len)
                .filter(|&len| len > 0)
                .collect();
            count += (runs == record.groups) as u64;
        }
        count
    }

    #[test]
    fn example_counts() {
        let records = Day12::parse(RECORDS).unwrap();
        let folded: Vec<u64> = records.iter().map(Record::arrangements).collect();
        assert_eq!(folded, vec![1, 4, 1, 1, 4, 10]);
        let unfolded: Vec<u64> = records
            .iter()
            .map(|r| r.unfold(UNFOLD).arrangements())
            .collect();
        assert_eq!(unfolded, vec![1, 16384, 1, 16, 2500, 506_250]);
    }

    #[test]
    fn example_parts() {
        let records = Day12::parse(RECORDS).unwrap();
        assert_eq!(Day12::part1(&records), Ok(21));
        assert_eq!(Day12::part2(&records), Ok(525_152));
    }

    #[test]
    fn unfold_joins_with_unknowns() {
        let record = Record::parse(0, ".# 1").unwrap();
        assert_eq!(record.unfold(2), Record::parse(0, ".#?.# 1,1").unwrap());
    }

    #[test]
    fn matches_brute_force_on_random_records() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..200 {
            let len = rng.random_range(1..=12);
            let springs: Vec<Spring> = (0..len)
                .map(|_| match rng.random_range(0..3) {
                    0 => Spring::Operational,
                    1 => Spring::Damaged,
                    _ => Spring::Unknown,
                })
                .collect();
            let groups: Vec<usize> = (0..rng.random_range(1..=3))
                .map(|_| rng.random_range(1..=3))
                .collect();
            let record = Record { springs, groups };
            assert_eq!(record.arrangements(), brute_force(&record), "{record:?}");
        }
    }

    #[test]
    fn malformed_records() {
        assert!(Day12::parse("??# 1,x").is_err());
        assert!(Day12::parse("??# 0").is_err());
        assert!(Day12::parse("?a# 1").is_err());
        assert!(Day12::parse("??#").is_err());
    }
}
