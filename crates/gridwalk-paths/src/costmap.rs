//! Digit cost grids as weighted pathers.
//!
//! Moving onto a cell costs that cell's digit; the cell being left is free.

use gridwalk_core::{Grid, Point};

use crate::traits::{Pather, WeightedPather};

impl Pather for Grid<u8> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.contains(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for Grid<u8> {
    #[inline]
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.at(to).map_or(0, |&c| c as i32)
    }
}
