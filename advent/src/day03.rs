//! Gear Ratios: numbers in an engine schematic and the symbols they touch.

use std::collections::HashMap;

use gridwalk_core::{Grid, Point, Range};

use crate::error::PuzzleError;
use crate::runner::Solution;

/// A run of digits on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartNumber {
    pub value: u64,
    /// Leftmost digit.
    pub at: Point,
    pub len: i32,
}

impl PartNumber {
    /// The number's cells plus the ring of cells around them.
    fn halo(&self) -> Range {
        Range::new(
            self.at.x - 1,
            self.at.y - 1,
            self.at.x + self.len + 1,
            self.at.y + 2,
        )
    }
}

#[derive(Debug, Clone)]
pub struct Schematic {
    cells: Grid<char>,
    numbers: Vec<PartNumber>,
}

fn is_symbol(c: char) -> bool {
    c != '.' && !c.is_ascii_digit()
}

impl Schematic {
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let cells = Grid::parse_with(text, |c, _| c.is_ascii_graphic().then_some(c))?;

        let mut numbers = Vec::new();
        for (y, row) in cells.rows().enumerate() {
            let mut current: Option<PartNumber> = None;
            for (x, &c) in row.iter().enumerate() {
                match (c.to_digit(10), current.as_mut()) {
                    (Some(d), Some(n)) => {
                        n.value = n.value * 10 + d as u64;
                        n.len += 1;
                    }
                    (Some(d), None) => {
                        current = Some(PartNumber {
                            value: d as u64,
                            at: Point::new(x as i32, y as i32),
                            len: 1,
                        });
                    }
                    (None, _) => numbers.extend(current.take()),
                }
            }
            numbers.extend(current);
        }
        log::debug!("schematic holds {} numbers", numbers.len());
        Ok(Self { cells, numbers })
    }

    pub fn numbers(&self) -> &[PartNumber] {
        &self.numbers
    }

    /// Symbols next to `n`, with their positions.
    fn adjacent_symbols(&self, n: &PartNumber) -> impl Iterator<Item = (Point, char)> {
        n.halo()
            .iter()
            .filter_map(|p| self.cells.at(p).map(|&c| (p, c)))
            .filter(|&(_, c)| is_symbol(c))
    }

    /// Sum of the numbers touching at least one symbol.
    pub fn part_number_sum(&self) -> u64 {
        self.numbers
            .iter()
            .filter(|n| self.adjacent_symbols(n).next().is_some())
            .map(|n| n.value)
            .sum()
    }

    /// Sum over `*` symbols touching exactly two numbers of their product.
    pub fn gear_ratio_sum(&self) -> u64 {
        let mut touching: HashMap<Point, Vec<u64>> = HashMap::new();
        for n in &self.numbers {
            for (p, c) in self.adjacent_symbols(n) {
                if c == '*' {
                    touching.entry(p).or_default().push(n.value);
                }
            }
        }
        touching
            .values()
            .filter_map(|v| match v.as_slice() {
                [a, b] => Some(a * b),
                _ => None,
            })
            .sum()
    }
}

pub struct Day03;

impl Solution for Day03 {
    const DAY: u8 = 3;
    const TITLE: &'static str = "Gear Ratios";
    type Input = Schematic;
    type Answer = u64;

    fn parse(text: &str) -> Result<Schematic, PuzzleError> {
        Schematic::parse(text)
    }

    fn part1(s: &Schematic) -> Result<u64, PuzzleError> {
        Ok(s.part_number_sum())
    }

    fn part2(s: &Schematic) -> Result<u64, PuzzleError> {
        Ok(s.gear_ratio_sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGINE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn example_parts() {
        let s = Day03::parse(ENGINE).unwrap();
        assert_eq!(s.numbers().len(), 10);
        assert_eq!(Day03::part1(&s), Ok(4361));
        assert_eq!(Day03::part2(&s), Ok(467_835));
    }

    #[test]
    fn numbers_at_row_ends() {
        let s = Day03::parse("12..\n..34\n").unwrap();
        let values: Vec<u64> = s.numbers().iter().map(|n| n.value).collect();
        assert_eq!(values, vec![12, 34]);
        assert_eq!(s.numbers()[1].at, Point::new(2, 1));
    }

    #[test]
    fn diagonal_contact_counts() {
        let s = Day03::parse("5..\n.*.\n..7\n").unwrap();
        assert_eq!(s.part_number_sum(), 12);
        assert_eq!(s.gear_ratio_sum(), 35);
    }

    #[test]
    fn gears_need_exactly_two_numbers() {
        let s = Day03::parse("1.2\n.*.\n3..\n").unwrap();
        assert_eq!(s.part_number_sum(), 6);
        assert_eq!(s.gear_ratio_sum(), 0);
    }

    #[test]
    fn whitespace_is_rejected() {
        assert!(matches!(Day03::parse("1 2\n"), Err(PuzzleError::Parse(_))));
    }
}
