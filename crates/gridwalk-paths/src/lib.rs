//! Grid search algorithms for the gridwalk puzzle solvers.
//!
//! - **Dijkstra** multi-source distance maps ([`PathRange::dijkstra_map`])
//! - **BFS** unweighted distance maps ([`PathRange::bfs_map`])
//! - **Run-constrained least-cost paths** ([`constrained_path_cost`],
//!   [`least_heat_loss`])
//! - **Step counting** on bounded or tiled maps ([`StepCounter`]), with a
//!   quadratic extrapolation for very long walks ([`QuadraticFit`])
//!
//! Distance maps go through [`PathRange`], which owns and reuses its
//! caches so that repeated queries incur no allocations after warm-up.
//! A digit cost grid (`Grid<u8>`) is a [`WeightedPather`] out of the box.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |

mod bfs;
mod costmap;
mod crucible;
mod dijkstra;
mod distance;
mod error;
mod neighbors;
mod pathrange;
mod reach;
mod traits;

pub use crucible::{RunLimits, constrained_path_cost, least_heat_loss};
pub use distance::manhattan;
pub use error::SearchError;
pub use neighbors::Neighbors;
pub use pathrange::{PathNode, PathRange, UNREACHABLE};
pub use reach::{Boundary, QuadraticFit, StepCounter};
pub use traits::{Pather, WeightedPather};
