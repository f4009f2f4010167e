//! [`Grid`]: a dense row-major 2D array addressed by [`Point`].
//!
//! Grids are built once from puzzle text through [`Grid::parse_with`] (or
//! [`Grid::parse_digits`] for cost maps) and then read by the search
//! algorithms. Out-of-range reads return `None` instead of panicking.

use std::ops::Index;

use crate::error::ParseError;
use crate::geom::{Point, Range};

/// A rectangular grid of `T` stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

impl<T> Grid<T> {
    /// Build a grid by calling `f` for every point in row-major order.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let cells = Range::new(0, 0, width, height).iter().map(&mut f).collect();
        Self {
            cells,
            width,
            height,
        }
    }

    /// Parse one row per line, one cell per character.
    ///
    /// `cell` receives each character together with its position and
    /// returns `None` to reject it. Trailing line breaks are ignored;
    /// every remaining line must have the width of the first one.
    pub fn parse_with(
        text: &str,
        mut cell: impl FnMut(char, Point) -> Option<T>,
    ) -> Result<Self, ParseError> {
        let text = text.trim_end_matches(&['\n', '\r'][..]);
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut cells = Vec::with_capacity(text.len());
        let mut width = None;
        let mut height = 0;
        for (y, line) in text.lines().enumerate() {
            let mut row_width = 0;
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let value = cell(ch, pos).ok_or(ParseError::InvalidChar { ch, pos })?;
                cells.push(value);
                row_width += 1;
            }
            match width {
                None => width = Some(row_width),
                Some(expected) if expected != row_width => {
                    return Err(ParseError::InconsistentWidth {
                        row: y,
                        expected,
                        found: row_width,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            return Err(ParseError::Empty);
        }
        Ok(Self {
            cells,
            width: width as i32,
            height,
        })
    }

    /// The bounding range, always anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y * self.width + p.x) as usize)
        } else {
            None
        }
    }

    /// Inverse of [`index_of`](Grid::index_of).
    #[inline]
    pub fn point_of(&self, idx: usize) -> Point {
        let w = self.width.max(1) as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&T> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    /// The cell at `p` on the infinite tiling of this grid.
    ///
    /// # Panics
    ///
    /// Panics if the grid is empty.
    #[inline]
    pub fn at_wrapped(&self, p: Point) -> &T {
        let q = p.wrap(self.size());
        &self.cells[(q.y * self.width + q.x) as usize]
    }

    /// Overwrite the cell at `p`. Returns `false` if `p` is out of bounds.
    pub fn set(&mut self, p: Point, value: T) -> bool {
        match self.index_of(p) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Swap the cells at `a` and `b`. Returns `false`, leaving the grid
    /// untouched, if either is out of bounds.
    pub fn swap(&mut self, a: Point, b: Point) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => {
                self.cells.swap(i, j);
                true
            }
            _ => false,
        }
    }

    /// The cells of row `y`.
    pub fn row(&self, y: i32) -> Option<&[T]> {
        if y < 0 || y >= self.height {
            return None;
        }
        let start = (y * self.width) as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Iterate over the cells of column `x`, top to bottom.
    pub fn column(&self, x: i32) -> impl Iterator<Item = &T> {
        (0..self.height).filter_map(move |y| self.at(Point::new(x, y)))
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Row-major iterator over `(Point, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.bounds().iter().zip(self.cells.iter())
    }

    /// First position (row-major) whose cell satisfies `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point> {
        self.cells.iter().position(|c| pred(c)).map(|i| self.point_of(i))
    }

    /// Every position whose cell satisfies `pred`, in row-major order.
    pub fn positions<'a>(
        &'a self,
        mut pred: impl FnMut(&T) -> bool + 'a,
    ) -> impl Iterator<Item = Point> + 'a {
        self.iter().filter(move |(_, c)| pred(*c)).map(|(p, _)| p)
    }

    /// Count cells satisfying `pred`.
    pub fn count(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(*c)).count()
    }

    /// Build a new grid of the same shape by transforming every cell.
    pub fn map<U>(&self, mut f: impl FnMut(Point, &T) -> U) -> Grid<U> {
        Grid {
            cells: self.iter().map(|(p, c)| f(p, c)).collect(),
            width: self.width,
            height: self.height,
        }
    }
}

impl<T: Clone> Grid<T> {
    /// A grid with every cell set to `value`.
    pub fn filled(width: i32, height: i32, value: T) -> Self {
        Self::from_fn(width, height, |_| value.clone())
    }

    /// A copy of this grid with the cell at `p` replaced.
    pub fn with(&self, p: Point, value: T) -> Self {
        let mut out = self.clone();
        out.set(p, value);
        out
    }
}

impl Grid<u8> {
    /// Parse a grid of decimal digits, one cost per character.
    pub fn parse_digits(text: &str) -> Result<Self, ParseError> {
        Self::parse_with(text, |ch, _| ch.to_digit(10).map(|d| d as u8))
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `p` is outside the grid.
    #[inline]
    fn index(&self, p: Point) -> &T {
        match self.index_of(p) {
            Some(i) => &self.cells[i],
            None => panic!("point {p} outside grid of size {}", self.size()),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse_digits("123\n456").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
