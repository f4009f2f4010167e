use gridwalk_core::{Direction, Point};

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal (4-way) neighbors of a grid point, filtered by
/// a predicate, into a reused buffer.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return 4-directional (cardinal) neighbors of `p`, keeping only those
    /// for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in Direction::ALL {
            let n = p.step(d);
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
