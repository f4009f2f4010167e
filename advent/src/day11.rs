//! Cosmic Expansion: pairwise galaxy distances in an expanding image.

use gridwalk_core::{Grid, Point};

use crate::error::PuzzleError;
use crate::runner::Solution;

/// Each empty row or column counts twice.
pub const PART1_RATE: u64 = 2;
/// Each empty row or column counts a million times.
pub const PART2_RATE: u64 = 1_000_000;

/// Galaxy positions after every empty row and column is widened to
/// `rate` rows or columns.
pub fn expanded_galaxies(image: &Grid<bool>, rate: u64) -> Vec<(u64, u64)> {
    let empty_cols: Vec<bool> = (0..image.width())
        .map(|x| !image.column(x).any(|&g| g))
        .collect();
    let empty_rows: Vec<bool> = image.rows().map(|row| !row.contains(&true)).collect();

    // Prefix counts of empty lines strictly before each index.
    let shift = |empty: &[bool]| -> Vec<u64> {
        empty
            .iter()
            .scan(0u64, |seen, &e| {
                let before = *seen;
                *seen += e as u64;
                Some(before)
            })
            .collect()
    };
    let col_shift = shift(&empty_cols);
    let row_shift = shift(&empty_rows);

    image
        .positions(|&g| g)
        .map(|p: Point| {
            let (x, y) = (p.x as usize, p.y as usize);
            (
                x as u64 + col_shift[x] * (rate - 1),
                y as u64 + row_shift[y] * (rate - 1),
            )
        })
        .collect()
}

/// Sum of Manhattan distances over every unordered pair of galaxies.
pub fn distance_sum(image: &Grid<bool>, rate: u64) -> u64 {
    let galaxies = expanded_galaxies(image, rate.max(1));
    let mut total = 0;
    for (i, &(ax, ay)) in galaxies.iter().enumerate() {
        for &(bx, by) in &galaxies[i + 1..] {
            total += ax.abs_diff(bx) + ay.abs_diff(by);
        }
    }
    log::debug!("{} galaxies at rate {rate}: {total}", galaxies.len());
    total
}

pub struct Day11;

impl Solution for Day11 {
    const DAY: u8 = 11;
    const TITLE: &'static str = "Cosmic Expansion";
    type Input = Grid<bool>;
    type Answer = u64;

    fn parse(text: &str) -> Result<Grid<bool>, PuzzleError> {
        Ok(Grid::parse_with(text, |c, _| match c {
            '#' => Some(true),
            '.' => Some(false),
            _ => None,
        })?)
    }

    fn part1(image: &Grid<bool>) -> Result<u64, PuzzleError> {
        Ok(distance_sum(image, PART1_RATE))
    }

    fn part2(image: &Grid<bool>) -> Result<u64, PuzzleError> {
        Ok(distance_sum(image, PART2_RATE))
    }
}

#[cfg(test)]
mod tests {
    use gridwalk_paths::manhattan;

    use super::*;

    const IMAGE: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

    fn image() -> Grid<bool> {
        Day11::parse(IMAGE).unwrap()
    }

    #[test]
    fn example_rates() {
        let img = image();
        assert_eq!(Day11::part1(&img), Ok(374));
        assert_eq!(distance_sum(&img, 10), 1030);
        assert_eq!(distance_sum(&img, 100), 8410);
    }

    #[test]
    fn rate_one_is_the_raw_image() {
        let img = image();
        let galaxies: Vec<Point> = img.positions(|&g| g).collect();
        let mut raw = 0;
        for (i, &a) in galaxies.iter().enumerate() {
            for &b in &galaxies[i + 1..] {
                raw += manhattan(a, b) as u64;
            }
        }
        assert_eq!(distance_sum(&img, 1), raw);
    }

    #[test]
    fn growth_is_linear_in_rate() {
        let img = image();
        let step = distance_sum(&img, 3) - distance_sum(&img, 2);
        assert_eq!(distance_sum(&img, PART2_RATE), 374 + step * (PART2_RATE - 2));
    }

    #[test]
    fn lone_galaxy() {
        let img = Day11::parse("...\n.#.\n...").unwrap();
        assert_eq!(distance_sum(&img, PART2_RATE), 0);
    }
}
