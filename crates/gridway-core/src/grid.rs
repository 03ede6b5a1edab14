//! The [`Grid`] type — the owning 2D container of [`Cell`]s.

use crate::cell::Cell;
use crate::geom::Point;

/// A rectangular grid that owns exactly one [`Cell`] per in-bounds
/// coordinate, stored flat in row-major order.
///
/// Searches borrow the grid mutably for the length of a run and leave their
/// parent chains on the cells; the grid itself outlives any search over it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell passable.
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_fn(width, height, |_| true)
    }

    /// Create a grid whose per-cell passability is decided by `passable`.
    pub fn from_fn(width: i32, height: i32, mut passable: impl FnMut(Point) -> bool) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        let mut cells = Vec::with_capacity((w * h) as usize);
        for y in 0..h {
            for x in 0..w {
                cells.push(Cell::with_passable(x, y, passable(Point::new(x, y))));
            }
        }
        Self {
            cells,
            width: w,
            height: h,
        }
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether `p` is inside the grid's bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let x = (idx as i32) % self.width;
        let y = (idx as i32) / self.width;
        Point::new(x, y)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// The cell at `p`, mutable, or `None` if out of bounds.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.idx(p).map(|i| &mut self.cells[i])
    }

    /// The cell at a flat index obtained from [`idx`](Grid::idx).
    #[inline]
    pub fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// The cell at a flat index, mutable.
    #[inline]
    pub fn cell_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// Set passability at `p`. Does nothing if out of bounds.
    pub fn set_passable(&mut self, p: Point, passable: bool) {
        if let Some(cell) = self.at_mut(p) {
            cell.set_passable(passable);
        }
    }

    /// Iterate over all cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> {
        self.cells.iter().enumerate().map(|(i, c)| (self.point(i), c))
    }
}
