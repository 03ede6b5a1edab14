//! Neighbor enumeration with diagonal gating.

use gridway_core::{Grid, Point};

/// Append the passable neighbors of `p` to `buf`, in a fixed order: up,
/// then (when `diagonal` is set) up-left and up-right, down, then down-left
/// and down-right, then left, then right.
///
/// A diagonal candidate is considered only when its vertical gate is in
/// bounds: the up-diagonals require `p.y + 1` to be inside the grid and the
/// down-diagonals require `p.y - 1` to be, regardless of whether the gate
/// cell itself is passable. Every candidate is then bounds-checked and
/// filtered on passability independently.
///
/// The fixed order makes open-list insertion order, and with it
/// tie-breaking, deterministic.
pub fn passable_neighbors(grid: &Grid, p: Point, diagonal: bool, buf: &mut Vec<Point>) {
    buf.clear();
    // up, with its gated diagonals
    if p.y + 1 < grid.height() {
        push_if_passable(grid, p.shift(0, 1), buf);
        if diagonal {
            if p.x - 1 >= 0 {
                push_if_passable(grid, p.shift(-1, 1), buf);
            }
            if p.x + 1 < grid.width() {
                push_if_passable(grid, p.shift(1, 1), buf);
            }
        }
    }
    // down, with its gated diagonals
    if p.y - 1 >= 0 {
        push_if_passable(grid, p.shift(0, -1), buf);
        if diagonal {
            if p.x - 1 >= 0 {
                push_if_passable(grid, p.shift(-1, -1), buf);
            }
            if p.x + 1 < grid.width() {
                push_if_passable(grid, p.shift(1, -1), buf);
            }
        }
    }
    // left
    if p.x - 1 >= 0 {
        push_if_passable(grid, p.shift(-1, 0), buf);
    }
    // right
    if p.x + 1 < grid.width() {
        push_if_passable(grid, p.shift(1, 0), buf);
    }
}

fn push_if_passable(grid: &Grid, p: Point, buf: &mut Vec<Point>) {
    if grid.at(p).is_some_and(|c| c.passable()) {
        buf.push(p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors(grid: &Grid, p: Point, diagonal: bool) -> Vec<Point> {
        let mut buf = Vec::new();
        passable_neighbors(grid, p, diagonal, &mut buf);
        buf
    }

    #[test]
    fn cardinal_order_at_center() {
        let g = Grid::new(3, 3);
        let got = neighbors(&g, Point::new(1, 1), false);
        assert_eq!(
            got,
            vec![
                Point::new(1, 2),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn diagonal_order_at_center() {
        let g = Grid::new(3, 3);
        let got = neighbors(&g, Point::new(1, 1), true);
        assert_eq!(
            got,
            vec![
                Point::new(1, 2),
                Point::new(0, 2),
                Point::new(2, 2),
                Point::new(1, 0),
                Point::new(0, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn corners_are_bounds_checked() {
        let g = Grid::new(3, 3);
        let got = neighbors(&g, Point::new(0, 0), true);
        assert_eq!(
            got,
            vec![Point::new(0, 1), Point::new(1, 1), Point::new(1, 0)]
        );
    }

    #[test]
    fn vertical_gate_blocks_diagonals_on_flat_grid() {
        // Height 1: neither vertical gate is in bounds, so no diagonals at
        // all even though the horizontal columns exist.
        let g = Grid::new(3, 1);
        let got = neighbors(&g, Point::new(1, 0), true);
        assert_eq!(got, vec![Point::new(0, 0), Point::new(2, 0)]);
    }

    #[test]
    fn impassable_gate_cell_does_not_block_diagonals() {
        // The up cell is impassable but in bounds, so the up-diagonals are
        // still considered (no corner-cutting restriction).
        let mut g = Grid::new(3, 3);
        g.set_passable(Point::new(1, 2), false);
        let got = neighbors(&g, Point::new(1, 1), true);
        assert!(!got.contains(&Point::new(1, 2)));
        assert!(got.contains(&Point::new(0, 2)));
        assert!(got.contains(&Point::new(2, 2)));
    }

    #[test]
    fn impassable_candidates_are_filtered() {
        let mut g = Grid::new(3, 3);
        g.set_passable(Point::new(0, 1), false);
        g.set_passable(Point::new(2, 1), false);
        let got = neighbors(&g, Point::new(1, 1), false);
        assert_eq!(got, vec![Point::new(1, 2), Point::new(1, 0)]);
    }
}
