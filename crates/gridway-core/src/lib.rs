//! **gridway-core** — grid pathfinding primitives.
//!
//! This crate provides the foundational types used across the *gridway*
//! workspace: the [`Point`] coordinate, distance metrics, the [`Cell`]
//! data model (coordinates, passability, and per-search cost bookkeeping),
//! and the owning [`Grid`] container.

pub mod cell;
pub mod distance;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use distance::Heuristic;
pub use geom::Point;
pub use grid::Grid;
