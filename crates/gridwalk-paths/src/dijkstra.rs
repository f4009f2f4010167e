use std::collections::BinaryHeap;

use gridwalk_core::Point;

use crate::PathRange;
use crate::pathrange::{Frontier, PathNode};
use crate::traits::WeightedPather;

impl PathRange {
    /// Multi-source Dijkstra. Every source starts at cost 0 and cells
    /// costing more than `max_cost` are left unreached. Returns the
    /// settled cells, cheapest first.
    pub fn dijkstra_map<P: WeightedPather>(
        &mut self,
        pather: &P,
        sources: &[Point],
        max_cost: i32,
    ) -> &[PathNode] {
        self.reset();
        let mut open = BinaryHeap::new();
        for &src in sources {
            if let Some(i) = self.idx(src) {
                self.dist[i] = 0;
                open.push(Frontier { idx: i, cost: 0 });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        while let Some(Frontier { idx, cost }) = open.pop() {
            if cost > self.dist[idx] {
                continue;
            }
            let pos = self.point(idx);
            self.settled.push(PathNode { pos, cost });

            nbuf.clear();
            pather.neighbors(pos, &mut nbuf);
            for &np in &nbuf {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let next = cost.saturating_add(pather.cost(pos, np));
                if next <= max_cost && next < self.dist[ni] {
                    self.dist[ni] = next;
                    open.push(Frontier { idx: ni, cost: next });
                }
            }
        }
        self.nbuf = nbuf;

        log::debug!(
            "dijkstra: settled {} of {} cells",
            self.settled.len(),
            self.rng.len()
        );
        &self.settled
    }
}

#[cfg(test)]
mod tests {
    use gridwalk_core::Grid;

    use super::*;
    use crate::UNREACHABLE;

    #[test]
    fn cost_of_entered_cells() {
        let grid = Grid::parse_digits("19\n11").unwrap();
        let mut pr = PathRange::new(grid.bounds());
        pr.dijkstra_map(&grid, &[Point::ZERO], i32::MAX);
        assert_eq!(pr.cost_at(Point::new(1, 1)), 2);
        // Entering the 9 costs 9 whichever side it is entered from.
        assert_eq!(pr.cost_at(Point::new(1, 0)), 9);
        assert_eq!(pr.cost_at(Point::ZERO), 0);
    }

    #[test]
    fn max_cost_bounds_expansion() {
        let grid = Grid::parse_digits("1111").unwrap();
        let mut pr = PathRange::new(grid.bounds());
        assert_eq!(pr.dijkstra_map(&grid, &[Point::ZERO], 2).len(), 3);
        assert_eq!(pr.cost_at(Point::new(3, 0)), UNREACHABLE);
    }

    #[test]
    fn settled_in_cost_order() {
        let grid = Grid::parse_digits("1911\n1111").unwrap();
        let mut pr = PathRange::new(grid.bounds());
        let costs: Vec<i32> = pr
            .dijkstra_map(&grid, &[Point::ZERO], i32::MAX)
            .iter()
            .map(|n| n.cost)
            .collect();
        assert!(costs.windows(2).all(|w| w[0] <= w[1]), "{costs:?}");
        assert_eq!(costs.len(), 8);
    }

    #[test]
    fn multi_source_takes_nearest() {
        let grid = Grid::parse_digits("11111").unwrap();
        let mut pr = PathRange::new(grid.bounds());
        pr.dijkstra_map(&grid, &[Point::new(0, 0), Point::new(4, 0)], i32::MAX);
        assert_eq!(pr.cost_at(Point::new(1, 0)), 1);
        assert_eq!(pr.cost_at(Point::new(3, 0)), 1);
        assert_eq!(pr.cost_at(Point::new(2, 0)), 2);
    }

    #[test]
    fn repeated_queries_reset_state() {
        let grid = Grid::parse_digits("123\n456").unwrap();
        let mut pr = PathRange::new(grid.bounds());
        pr.dijkstra_map(&grid, &[Point::ZERO], i32::MAX);
        let first: Vec<_> = grid.bounds().iter().map(|p| pr.cost_at(p)).collect();
        pr.dijkstra_map(&grid, &[Point::new(2, 1)], i32::MAX);
        pr.dijkstra_map(&grid, &[Point::ZERO], i32::MAX);
        let again: Vec<_> = grid.bounds().iter().map(|p| pr.cost_at(p)).collect();
        assert_eq!(first, again);
    }
}
