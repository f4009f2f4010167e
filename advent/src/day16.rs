//! The Floor Will Be Lava: beams bouncing through mirrors and splitters.

use gridwalk_core::{Direction, Grid, Point};

use crate::error::PuzzleError;
use crate::runner::Solution;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    /// `/`
    Slash,
    /// `\`
    Backslash,
    /// `|`, splits horizontal beams.
    VerticalSplitter,
    /// `-`, splits vertical beams.
    HorizontalSplitter,
}

impl Tile {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Tile::Empty),
            '/' => Some(Tile::Slash),
            '\\' => Some(Tile::Backslash),
            '|' => Some(Tile::VerticalSplitter),
            '-' => Some(Tile::HorizontalSplitter),
            _ => None,
        }
    }

    /// Outgoing heading(s) of a beam arriving with `heading`.
    pub fn deflect(self, heading: Direction) -> (Direction, Option<Direction>) {
        use Direction::*;
        match (self, heading) {
            (Tile::Slash, East) | (Tile::Backslash, West) => (North, None),
            (Tile::Slash, West) | (Tile::Backslash, East) => (South, None),
            (Tile::Slash, North) | (Tile::Backslash, South) => (East, None),
            (Tile::Slash, South) | (Tile::Backslash, North) => (West, None),
            (Tile::VerticalSplitter, East | West) => (North, Some(South)),
            (Tile::HorizontalSplitter, North | South) => (West, Some(East)),
            _ => (heading, None),
        }
    }
}

/// Number of cells a beam crosses when it enters at `start` heading
/// `heading`.
pub fn energized(grid: &Grid<Tile>, start: Point, heading: Direction) -> usize {
    // One bit per heading a beam has crossed the cell with.
    let mut seen = vec![0u8; grid.len()];
    let mut stack = vec![(start, heading)];

    while let Some((pos, heading)) = stack.pop() {
        let Some(i) = grid.index_of(pos) else {
            continue;
        };
        let bit = 1 << heading.index();
        if seen[i] & bit != 0 {
            continue;
        }
        seen[i] |= bit;

        let (first, second) = grid.cells()[i].deflect(heading);
        stack.push((pos.step(first), first));
        if let Some(d) = second {
            stack.push((pos.step(d), d));
        }
    }
    seen.iter().filter(|&&b| b != 0).count()
}

/// Best [`energized`] count over every edge cell and inward heading.
pub fn best_entry(grid: &Grid<Tile>) -> usize {
    let entries = grid.bounds().edges();
    let best = entries
        .iter()
        .map(|&(p, d)| energized(grid, p, d))
        .max()
        .unwrap_or(0);
    log::debug!("best of {} entries energizes {best} cells", entries.len());
    best
}

pub struct Day16;

impl Solution for Day16 {
    const DAY: u8 = 16;
    const TITLE: &'static str = "The Floor Will Be Lava";
    type Input = Grid<Tile>;
    type Answer = usize;

    fn parse(text: &str) -> Result<Grid<Tile>, PuzzleError> {
        Ok(Grid::parse_with(text, |c, _| Tile::from_char(c))?)
    }

    fn part1(grid: &Grid<Tile>) -> Result<usize, PuzzleError> {
        Ok(energized(grid, Point::ZERO, Direction::East))
    }

    fn part2(grid: &Grid<Tile>) -> Result<usize, PuzzleError> {
        Ok(best_entry(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRAPTION: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....
";

    #[test]
    fn example_parts() {
        let grid = Day16::parse(CONTRAPTION).unwrap();
        assert_eq!(Day16::part1(&grid), Ok(46));
        assert_eq!(Day16::part2(&grid), Ok(51));
    }

    #[test]
    fn empty_row_lights_the_rest_of_the_row() {
        let grid = Day16::parse(".....\n.....\n").unwrap();
        assert_eq!(energized(&grid, Point::new(2, 1), Direction::East), 3);
        assert_eq!(best_entry(&grid), 5);
    }

    #[test]
    fn beams_in_a_loop_terminate() {
        // Mirrors send the beam round a closed square forever.
        let grid = Day16::parse("/-\\\n|.|\n\\-/\n").unwrap();
        assert_eq!(energized(&grid, Point::new(1, 0), Direction::East), 8);
    }

    #[test]
    fn splitters() {
        assert_eq!(
            Tile::VerticalSplitter.deflect(Direction::East),
            (Direction::North, Some(Direction::South))
        );
        assert_eq!(
            Tile::VerticalSplitter.deflect(Direction::North),
            (Direction::North, None)
        );
        assert_eq!(
            Tile::HorizontalSplitter.deflect(Direction::South),
            (Direction::West, Some(Direction::East))
        );
    }

    #[test]
    fn mirrors_are_reversible() {
        for tile in [Tile::Slash, Tile::Backslash] {
            for d in Direction::ALL {
                let (out, none) = tile.deflect(d);
                assert_eq!(none, None);
                assert_eq!(tile.deflect(out.reverse()).0, d.reverse());
            }
        }
    }
}
