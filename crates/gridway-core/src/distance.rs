//! Distance metrics between grid points.

use crate::geom::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn euclidean_sq(a: Point, b: Point) -> i32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Euclidean distance between two points, truncated to an integer.
#[inline]
pub fn euclidean(a: Point, b: Point) -> i32 {
    f64::from(euclidean_sq(a, b)).sqrt() as i32
}

/// The goal metric used for a cell's `h` estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Squared Euclidean distance. This is the default.
    #[default]
    SquaredEuclidean,
    /// Euclidean distance truncated to an integer.
    Euclidean,
}

impl Heuristic {
    /// Measure the distance from `a` to `b` under this metric.
    #[inline]
    pub fn measure(self, a: Point, b: Point) -> i32 {
        match self {
            Self::SquaredEuclidean => euclidean_sq(a, b),
            Self::Euclidean => euclidean(a, b),
        }
    }
}
