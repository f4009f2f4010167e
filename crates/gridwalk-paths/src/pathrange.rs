use gridwalk_core::{Point, Range};

/// A cell and its distance from the nearest source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Distance of cells a search never reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Heap entry for the weighted search, smallest `cost` first.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct Frontier {
    pub(crate) idx: usize,
    pub(crate) cost: i32,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.cost.cmp(&self.cost)
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Distance maps over a fixed rectangle.
///
/// The rectangle need not start at the origin, and need not match the
/// pather's own extent: neighbours outside it are ignored. That lets a
/// walk on an infinitely tiled map be measured inside a finite window.
///
/// The buffers are reused, so running many searches over the same
/// rectangle allocates only once. Each search overwrites the previous
/// map.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    /// Distance of every cell from the last search's sources.
    pub(crate) dist: Vec<i32>,
    /// Reached cells in the order the last search settled them.
    pub(crate) settled: Vec<PathNode>,
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            dist: vec![UNREACHABLE; rng.len()],
            settled: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Distance of `p` in the last map, or [`UNREACHABLE`].
    pub fn cost_at(&self, p: Point) -> i32 {
        self.idx(p).map_or(UNREACHABLE, |i| self.dist[i])
    }

    /// Forget the previous search.
    pub(crate) fn reset(&mut self) {
        self.dist.fill(UNREACHABLE);
        self.settled.clear();
    }

    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new(
            (idx % self.width) as i32 + self.rng.min.x,
            (idx / self.width) as i32 + self.rng.min.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_ranges_index_from_their_corner() {
        let pr = PathRange::new(Range::new(-3, -2, 4, 5));
        let corner = Point::new(-3, -2);
        assert_eq!(pr.idx(corner), Some(0));
        assert_eq!(pr.point(0), corner);
        let q = Point::new(2, 1);
        assert_eq!(pr.idx(q).map(|i| pr.point(i)), Some(q));
        assert_eq!(pr.idx(Point::new(4, 0)), None);
    }

    #[test]
    fn fresh_map_reaches_nothing() {
        let pr = PathRange::new(Range::new(0, 0, 3, 3));
        assert_eq!(pr.cost_at(Point::new(1, 1)), UNREACHABLE);
        assert_eq!(pr.cost_at(Point::new(9, 9)), UNREACHABLE);
    }
}
