use std::collections::VecDeque;

use gridwalk_core::Point;

use crate::PathRange;
use crate::pathrange::{PathNode, UNREACHABLE};
use crate::traits::Pather;

impl PathRange {
    /// Multi-source breadth-first search with unit steps, stopping at
    /// `max_dist`. Returns the reached cells in order of distance.
    pub fn bfs_map<P: Pather>(&mut self, pather: &P, sources: &[Point], max_dist: i32) -> &[PathNode] {
        self.reset();
        let mut queue = VecDeque::new();
        for &src in sources {
            match self.idx(src) {
                Some(i) if self.dist[i] == UNREACHABLE => {
                    self.dist[i] = 0;
                    queue.push_back(i);
                }
                _ => {}
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        while let Some(idx) = queue.pop_front() {
            let (pos, d) = (self.point(idx), self.dist[idx]);
            self.settled.push(PathNode { pos, cost: d });
            if d >= max_dist {
                continue;
            }

            nbuf.clear();
            pather.neighbors(pos, &mut nbuf);
            for &np in &nbuf {
                if let Some(ni) = self.idx(np) {
                    if self.dist[ni] == UNREACHABLE {
                        self.dist[ni] = d + 1;
                        queue.push_back(ni);
                    }
                }
            }
        }
        self.nbuf = nbuf;
        &self.settled
    }
}
