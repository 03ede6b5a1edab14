//! The open/closed-list A* searcher.

use gridway_core::{Grid, Heuristic, Point};

use crate::neighbors::passable_neighbors;

/// Single-shot shortest-path search between two grid coordinates.
///
/// The searcher borrows the grid exclusively for the length of the run and
/// writes its bookkeeping (`g`, `h`, parent links) straight onto the cells,
/// so a second search cannot run concurrently over the same grid. Finishing
/// the run releases the borrow; the parent chain stays on the grid for
/// [`reconstruct`] until the next search overwrites it.
pub struct Searcher<'a> {
    grid: &'a mut Grid,
    start: Point,
    goal: Point,
    diagonal: bool,
    heuristic: Heuristic,
    open: Vec<usize>,
    closed: Vec<usize>,
}

impl<'a> Searcher<'a> {
    /// Create a searcher. `diagonal` enables 8-directional movement.
    ///
    /// The caller is expected to have made `start` passable. `goal` may be
    /// impassable, in which case the search fails immediately.
    pub fn new(grid: &'a mut Grid, start: Point, goal: Point, diagonal: bool) -> Self {
        Self {
            grid,
            start,
            goal,
            diagonal,
            heuristic: Heuristic::default(),
            open: Vec::new(),
            closed: Vec::new(),
        }
    }

    /// Select the goal metric (defaults to [`Heuristic::SquaredEuclidean`]).
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Run the search to completion.
    ///
    /// Returns the goal coordinate when a path exists; walk the parent chain
    /// with [`reconstruct`] to recover it. Returns `None` when the goal is
    /// impassable, when either endpoint is out of bounds, or when the open
    /// list empties without reaching the goal.
    ///
    /// Each iteration expands the open-list head, which the stable re-sort
    /// keeps at the smallest `f` with ties broken by insertion order.
    pub fn find_path(mut self) -> Option<Point> {
        let start_idx = self.grid.idx(self.start)?;
        let goal_idx = self.grid.idx(self.goal)?;

        if !self.grid.cell(goal_idx).passable() {
            return None;
        }

        let (start, goal) = (self.start, self.goal);
        let heuristic = self.heuristic;

        let start_cell = self.grid.cell_mut(start_idx);
        start_cell.set_parent(None);
        start_cell.calculate_f_with(start, goal, heuristic);
        self.open.push(start_idx);

        let mut neighbors: Vec<Point> = Vec::with_capacity(8);

        while let Some(&current) = self.open.first() {
            if current == goal_idx {
                return Some(goal);
            }
            self.open.remove(0);

            let current_point = self.grid.point(current);
            passable_neighbors(self.grid, current_point, self.diagonal, &mut neighbors);

            for &np in &neighbors {
                let Some(ni) = self.grid.idx(np) else {
                    continue;
                };
                let fresh_f = self.grid.cell_mut(ni).calculate_f_with(start, goal, heuristic);
                let fresh_g = self.grid.cell(ni).g();

                let in_open = self.open.contains(&ni);
                let in_closed = self.closed.contains(&ni);

                if !in_open && !in_closed {
                    // First discovery.
                    self.grid.cell_mut(ni).set_parent(Some(current));
                    self.open.push(ni);
                } else if in_open && fresh_f < self.grid.cell(ni).f() {
                    // A cheaper route to a cell still awaiting expansion:
                    // adopt the new parent and g. h depends only on the
                    // fixed goal and stays as is.
                    let cell = self.grid.cell_mut(ni);
                    cell.set_parent(Some(current));
                    cell.set_g(fresh_g);
                } else if in_closed && fresh_f < self.grid.cell(ni).f() {
                    // A cheaper route to an already-expanded cell: re-open it.
                    self.grid.cell_mut(ni).set_parent(Some(current));
                    self.closed.retain(|&i| i != ni);
                    self.open.push(ni);
                }
            }

            // The expanded cell is settled once its neighbors are processed.
            // A cell with no neighbors never enters the closed list and may
            // be re-discovered later.
            if !neighbors.is_empty() {
                self.closed.push(current);
            }

            // Stable: among equal f, first-inserted stays first.
            let grid = &*self.grid;
            self.open.sort_by_key(|&i| grid.cell(i).f());
        }

        None
    }
}

/// Walk parent links from `terminal` back to the parentless start cell and
/// return the coordinates in start-to-terminal order.
///
/// `terminal` is the cell returned by [`Searcher::find_path`]; calling this
/// after a later search over the same grid walks that later search's links
/// instead. Returns an empty vec if `terminal` is out of bounds. A genuine
/// path visits each cell at most once, so the walk is capped at the grid's
/// cell count; parent links mixing two runs can cycle, and the cap turns
/// that misuse into a truncated path rather than a hang.
pub fn reconstruct(grid: &Grid, terminal: Point) -> Vec<Point> {
    let Some(mut idx) = grid.idx(terminal) else {
        return Vec::new();
    };
    let cells = (grid.width() * grid.height()) as usize;
    let mut path = vec![grid.point(idx)];
    while let Some(parent) = grid.cell(idx).parent() {
        if path.len() >= cells {
            break;
        }
        idx = parent;
        path.push(grid.point(idx));
    }
    path.reverse();
    path
}
