use super::PathFinder;
use crate::{
    dims::Dims,
    grid::{Cell, Direction, Grid},
};

/// Depth-first path search over open cells.
///
/// Neighbours are tried up, down, left, right and the first path found wins,
/// so the result is deterministic for a given grid but not necessarily the
/// shortest. Cells on the current branch are marked [`Cell::Visited`], which
/// also keeps the search out of cycles; dead ends are turned back to
/// [`Cell::Open`] when the search leaves them.
///
/// The exit is checked before the cell state, so it may sit on a wall.
pub struct DepthFirstSearch {}

impl PathFinder for DepthFirstSearch {
    fn find_path_to(grid: &mut Grid, pos: Dims, exit: Dims) -> bool {
        if !grid.is_in_bounds(pos) {
            return false;
        }

        if pos == exit {
            grid[pos] = Cell::Exit;
            return true;
        }

        if !grid[pos].is_open() {
            return false;
        }

        grid[pos] = Cell::Visited;

        for dir in Direction::get_in_order() {
            if Self::find_path_to(grid, pos + dir.to_coord(), exit) {
                return true;
            }
        }

        grid[pos] = Cell::Open;
        false
    }
}
