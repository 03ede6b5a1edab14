//! The [`Cell`] type — one grid location with its search bookkeeping.

use std::hash::{Hash, Hasher};

use crate::distance::{self, Heuristic};
use crate::geom::Point;

/// A single grid cell: immutable coordinates plus the mutable bookkeeping
/// (`g`, `h`, parent backpointer) a search writes while it runs.
///
/// Two cells are equal iff their coordinates are equal; the bookkeeping
/// fields never take part in equality or hashing. The parent backpointer is
/// a flat index into the owning [`Grid`](crate::Grid), so cells never
/// reference each other directly.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    x: i32,
    y: i32,
    passable: bool,
    g: i32,
    h: i32,
    parent: Option<usize>,
}

impl Cell {
    /// Create a passable cell at `(x, y)` with zeroed cost estimates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self::with_passable(x, y, true)
    }

    /// Create a cell with explicit passability.
    pub const fn with_passable(x: i32, y: i32, passable: bool) -> Self {
        Self {
            x,
            y,
            passable,
            g: 0,
            h: 0,
            parent: None,
        }
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// The cell's coordinate as a [`Point`].
    #[inline]
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether a search may traverse this cell.
    #[inline]
    pub const fn passable(&self) -> bool {
        self.passable
    }

    /// Set passability. Callers typically use this before a search, e.g. to
    /// force a start cell passable.
    #[inline]
    pub fn set_passable(&mut self, passable: bool) {
        self.passable = passable;
    }

    /// Cost-from-start estimate, as of the last evaluation.
    #[inline]
    pub const fn g(&self) -> i32 {
        self.g
    }

    /// Overwrite the cost-from-start estimate.
    #[inline]
    pub fn set_g(&mut self, g: i32) {
        self.g = g;
    }

    /// Cost-to-goal estimate, as of the last evaluation.
    #[inline]
    pub const fn h(&self) -> i32 {
        self.h
    }

    /// Estimated total cost. Always derived from the current `g` and `h`,
    /// never stored.
    #[inline]
    pub const fn f(&self) -> i32 {
        self.g + self.h
    }

    /// Flat grid index of the preceding cell on the best route found so far.
    #[inline]
    pub const fn parent(&self) -> Option<usize> {
        self.parent
    }

    #[inline]
    pub fn set_parent(&mut self, parent: Option<usize>) {
        self.parent = parent;
    }

    /// Recompute the cost estimates relative to the fixed `start` and `goal`
    /// coordinates and return the resulting `f`.
    ///
    /// `g` becomes the Manhattan distance from `start` to this cell — a
    /// function of the fixed start coordinate, not an accumulated cost of
    /// the route the search took to get here. `h` becomes the squared
    /// Euclidean distance to `goal`.
    pub fn calculate_f(&mut self, start: Point, goal: Point) -> i32 {
        self.calculate_f_with(start, goal, Heuristic::SquaredEuclidean)
    }

    /// Like [`calculate_f`](Cell::calculate_f), with an explicit goal metric.
    pub fn calculate_f_with(&mut self, start: Point, goal: Point, heuristic: Heuristic) -> i32 {
        self.g = distance::manhattan(self.point(), start);
        self.h = heuristic.measure(self.point(), goal);
        self.f()
    }
}

impl PartialEq for Cell {
    /// Structural, by coordinates only.
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let c = Cell::new(2, 5);
        assert_eq!(c.point(), Point::new(2, 5));
        assert!(c.passable());
        assert_eq!(c.g(), 0);
        assert_eq!(c.h(), 0);
        assert_eq!(c.f(), 0);
        assert_eq!(c.parent(), None);

        let blocked = Cell::with_passable(1, 1, false);
        assert!(!blocked.passable());
    }

    #[test]
    fn test_equality_ignores_bookkeeping() {
        let mut a = Cell::new(3, 3);
        let b = Cell::new(3, 3);
        a.set_parent(Some(7));
        a.calculate_f(Point::ZERO, Point::new(9, 9));
        assert_eq!(a, b);
        assert_ne!(Cell::new(3, 4), b);
    }

    #[test]
    fn test_calculate_f() {
        let mut c = Cell::new(2, 3);
        let f = c.calculate_f(Point::new(0, 0), Point::new(5, 7));
        // g = |0-2| + |0-3|, h = (5-2)^2 + (7-3)^2
        assert_eq!(c.g(), 5);
        assert_eq!(c.h(), 25);
        assert_eq!(f, 30);
        assert_eq!(c.f(), 30);
    }

    #[test]
    fn test_calculate_f_rooted_mode() {
        let mut c = Cell::new(2, 3);
        let f = c.calculate_f_with(Point::new(0, 0), Point::new(5, 7), Heuristic::Euclidean);
        assert_eq!(c.g(), 5);
        assert_eq!(c.h(), 5); // trunc(sqrt(25))
        assert_eq!(f, 10);
    }

    #[test]
    fn test_recalculation_is_idempotent() {
        let mut c = Cell::new(4, 1);
        let first = c.calculate_f(Point::ZERO, Point::new(8, 8));
        let second = c.calculate_f(Point::ZERO, Point::new(8, 8));
        assert_eq!(first, second);
    }
}
