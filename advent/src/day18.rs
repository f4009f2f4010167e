//! Lavaduct Lagoon: volume of a trench dug from a plan.
//!
//! The trench is a rectilinear polygon one cell wide. Its cell count is
//! the shoelace area plus half the perimeter plus one.

use gridwalk_core::{Direction, ParseError, Point};

use crate::error::PuzzleError;
use crate::runner::Solution;

/// One dig instruction as read plainly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dig {
    pub heading: Direction,
    pub meters: i64,
}

/// A plan line: the plain instruction and the one hidden in its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigLine {
    pub plain: Dig,
    pub encoded: Dig,
}

fn heading_letter(s: &str) -> Option<Direction> {
    match s {
        "U" => Some(Direction::North),
        "R" => Some(Direction::East),
        "D" => Some(Direction::South),
        "L" => Some(Direction::West),
        _ => None,
    }
}

/// Decode `(#rrrrrd)`: five hex digits of distance, then `0..=3` for
/// right, down, left, up.
fn decode_colour(s: &str) -> Option<Dig> {
    let hex = s.strip_prefix("(#")?.strip_suffix(')')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let meters = i64::from_str_radix(&hex[..5], 16).ok().filter(|&m| m > 0)?;
    let heading = match &hex[5..] {
        "0" => Direction::East,
        "1" => Direction::South,
        "2" => Direction::West,
        "3" => Direction::North,
        _ => return None,
    };
    Some(Dig { heading, meters })
}

impl DigLine {
    fn parse(index: usize, line: &str) -> Result<Self, ParseError> {
        let mut fields = line.split_whitespace();
        let (Some(dir), Some(meters), Some(colour), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(ParseError::line(index, "expected `D N (#rrggbb)`"));
        };
        let heading =
            heading_letter(dir).ok_or_else(|| ParseError::line(index, "unknown direction"))?;
        let meters: u32 = meters
            .parse()
            .map_err(|_| ParseError::line(index, "distance is not a number"))?;
        if meters == 0 {
            return Err(ParseError::line(index, "distance must be positive"));
        }
        let encoded =
            decode_colour(colour).ok_or_else(|| ParseError::line(index, "malformed colour"))?;
        Ok(Self {
            plain: Dig {
                heading,
                meters: meters.into(),
            },
            encoded,
        })
    }
}

/// Cells inside or on the trench traced by `digs` from the origin.
pub fn lagoon_volume(digs: impl IntoIterator<Item = Dig>) -> u64 {
    let (mut x, mut y) = (0i64, 0i64);
    let mut twice_area = 0i64;
    let mut perimeter = 0i64;
    for dig in digs {
        let Point { x: dx, y: dy } = dig.heading.delta();
        let (nx, ny) = (x + dx as i64 * dig.meters, y + dy as i64 * dig.meters);
        twice_area += x * ny - nx * y;
        perimeter += dig.meters;
        (x, y) = (nx, ny);
    }
    (twice_area.abs() / 2 + perimeter / 2 + 1) as u64
}

pub struct Day18;

impl Solution for Day18 {
    const DAY: u8 = 18;
    const TITLE: &'static str = "Lavaduct Lagoon";
    type Input = Vec<DigLine>;
    type Answer = u64;

    fn parse(text: &str) -> Result<Vec<DigLine>, PuzzleError> {
        let lines = text
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .map(|(i, l)| DigLine::parse(i, l))
            .collect::<Result<Vec<_>, _>>()?;
        if lines.is_empty() {
            return Err(ParseError::Empty.into());
        }
        Ok(lines)
    }

    fn part1(plan: &Vec<DigLine>) -> Result<u64, PuzzleError> {
        Ok(lagoon_volume(plan.iter().map(|l| l.plain)))
    }

    fn part2(plan: &Vec<DigLine>) -> Result<u64, PuzzleError> {
        Ok(lagoon_volume(plan.iter().map(|l| l.encoded)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = "\
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)
";

    #[test]
    fn example_parts() {
        let plan = Day18::parse(PLAN).unwrap();
        assert_eq!(Day18::part1(&plan), Ok(62));
        assert_eq!(Day18::part2(&plan), Ok(952_408_144_115));
    }

    #[test]
    fn colour_decoding() {
        let line = DigLine::parse(0, "R 6 (#70c710)").unwrap();
        assert_eq!(
            line.encoded,
            Dig {
                heading: Direction::East,
                meters: 461_937,
            }
        );
        assert_eq!(decode_colour("(#70c714)"), None);
        assert_eq!(decode_colour("#70c710"), None);
        assert_eq!(decode_colour("(#000000)"), None);
    }

    #[test]
    fn unit_square() {
        let digs = [
            Direction::East,
            Direction::South,
            Direction::West,
            Direction::North,
        ]
        .map(|heading| Dig { heading, meters: 1 });
        assert_eq!(lagoon_volume(digs), 4);
    }

    #[test]
    fn orientation_does_not_matter() {
        let plan = Day18::parse(PLAN).unwrap();
        let reversed = plan.iter().rev().map(|l| Dig {
            heading: l.plain.heading.reverse(),
            meters: l.plain.meters,
        });
        assert_eq!(lagoon_volume(reversed), 62);
    }

    #[test]
    fn bad_lines_report_their_number() {
        let err = Day18::parse("R 6 (#70c710)\nQ 1 (#000000)\n").unwrap_err();
        assert_eq!(
            err,
            PuzzleError::Parse(ParseError::InvalidLine {
                line: 2,
                reason: "unknown direction".into(),
            })
        );
        assert!(Day18::parse("R six (#70c710)").is_err());
        assert!(Day18::parse("R 1.5 (#70c710)").is_err());
        assert!(Day18::parse("R 6").is_err());
        assert_eq!(Day18::parse("\n"), Err(PuzzleError::Parse(ParseError::Empty)));
    }

    #[test]
    fn distances_must_be_positive() {
        let reason = |line: &str| match Day18::parse(line) {
            Err(PuzzleError::Parse(ParseError::InvalidLine { line: 1, reason })) => reason,
            other => panic!("{line:?} gave {other:?}"),
        };
        assert_eq!(reason("R -4 (#000040)"), "distance is not a number");
        assert_eq!(reason("R 0 (#000040)"), "distance must be positive");
        assert_eq!(reason("R 4 (#000000)"), "malformed colour");
    }
}
