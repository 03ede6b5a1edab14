//! **gridway-paths** — A* shortest-path search over a [`gridway_core::Grid`].
//!
//! The search is the sorted open/closed-list variant: the open list is kept
//! ascending by `f` and the head is expanded each iteration, with ties
//! broken by insertion order. Movement is 4-directional, or 8-directional
//! when diagonal movement is enabled (see [`passable_neighbors`] for the
//! gating rule). The searcher writes its bookkeeping (`g`, `h`, parent
//! links) onto the grid's cells; the caller recovers the path afterwards
//! with [`reconstruct`].
//!
//! ```
//! use gridway_core::{Grid, Point};
//! use gridway_paths::{reconstruct, Searcher};
//!
//! let mut grid = Grid::new(5, 5);
//! let start = Point::new(0, 0);
//! let goal = Point::new(4, 4);
//! let terminal = Searcher::new(&mut grid, start, goal, false)
//!     .find_path()
//!     .expect("open grid always has a path");
//! let path = reconstruct(&grid, terminal);
//! assert_eq!(path.len(), 9);
//! ```

mod neighbors;
mod searcher;

pub use gridway_core::Heuristic;
pub use gridway_core::distance::{chebyshev, euclidean, euclidean_sq, manhattan};
pub use neighbors::passable_neighbors;
pub use searcher::{Searcher, reconstruct};
