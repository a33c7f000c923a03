use rand::seq::SliceRandom as _;

use super::{MazeCarver, Random};
use crate::{
    dims::Dims,
    grid::{Cell, Direction, Grid},
};

/// Randomized depth-first carving.
///
/// From the current cell centre it jumps two cells in each direction, in
/// random order, and whenever it lands on an untouched wall it opens that
/// centre together with the wall slot in between, then continues from there.
/// Returning from the recursion is the backtracking step; nothing needs to be
/// undone since opened cells stay open. The result is a spanning tree over all
/// reachable cell centres.
///
/// Recursion depth grows with the number of cell centres, so very large grids
/// need a thread with a big enough stack.
pub struct RecursiveBacktracker {}

impl MazeCarver for RecursiveBacktracker {
    fn carve(grid: &mut Grid, start: Dims, rng: &mut Random) {
        if !grid.is_in_bounds(start) {
            return;
        }

        let mut dirs = Direction::get_in_order();
        dirs.shuffle(rng);

        for dir in dirs {
            let target = start + dir.jump();
            if grid.get(target) == Some(Cell::Wall) {
                grid[target] = Cell::Open;
                grid[start + dir.to_coord()] = Cell::Open;

                Self::carve(grid, target, rng);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;
    use rand::seq::SliceRandom as _;

    use super::*;
    use crate::algorithms::new_random;

    fn carved(size: Dims, seed: u64) -> Grid {
        let (mut rng, _) = new_random(Some(seed));
        let mut grid = Grid::new(size).unwrap();
        let start = grid.start();
        grid[start] = Cell::Open;
        RecursiveBacktracker::carve(&mut grid, start, &mut rng);
        grid
    }

    #[test]
    fn carves_spanning_tree() {
        for (i, size) in [Dims(3, 3), Dims(5, 5), Dims(7, 11), Dims(21, 41), Dims(31, 31)]
            .into_iter()
            .enumerate()
        {
            let grid = carved(size, i as u64);
            assert!(grid.is_perfect(grid.start()), "{:?}", size);
        }
    }

    #[test]
    fn respects_layout() {
        let grid = carved(Dims(15, 21), 3);

        for pos in grid.iter_pos() {
            let on_border =
                pos.0 == 0 || pos.1 == 0 || pos.0 == grid.size().0 - 1 || pos.1 == grid.size().1 - 1;
            let pillar = pos.0 % 2 == 0 && pos.1 % 2 == 0;

            if on_border || pillar {
                assert_eq!(grid[pos], Cell::Wall, "{:?}", pos);
            }
            if grid.is_cell_center(pos) {
                assert_eq!(grid[pos], Cell::Open, "{:?}", pos);
            }
        }

        // a tree over 7 * 10 centres joins them with 69 opened wall slots
        assert_eq!(grid.carved_count(), 70 + 69);
    }

    #[test]
    fn only_touches_walls() {
        let (mut rng, _) = new_random(Some(1));
        let mut grid = Grid::from_rows(&[
            "#########",
            "#   #####",
            "#########",
            "#########",
            "#########",
        ])
        .unwrap();

        RecursiveBacktracker::carve(&mut grid, Dims(1, 1), &mut rng);

        assert!(grid.is_perfect(Dims(1, 1)));
        // six walled centres, each opened along with one wall slot
        assert_eq!(grid.count(Cell::Open), 3 + 6 * 2);
        assert_eq!(grid[Dims(1, 4)], Cell::Wall);
        assert_eq!(grid[Dims(1, 2)], Cell::Open);
    }

    #[test]
    fn shuffle_reaches_every_order() {
        let (mut rng, _) = new_random(Some(11));
        let mut orders = HashSet::new();

        for _ in 0..2000 {
            let mut dirs = Direction::get_in_order();
            dirs.shuffle(&mut rng);
            orders.insert(dirs);
        }

        assert_eq!(orders.len(), 24);
    }

    #[test]
    fn outside_start_does_nothing() {
        let (mut rng, _) = new_random(Some(0));
        let mut grid = Grid::new(Dims(5, 5)).unwrap();

        RecursiveBacktracker::carve(&mut grid, Dims(-1, 3), &mut rng);
        RecursiveBacktracker::carve(&mut grid, Dims(1, 5), &mut rng);

        assert_eq!(grid, Grid::new(Dims(5, 5)).unwrap());
    }

    #[test]
    fn tolerates_even_and_tiny_grids() {
        let (mut rng, _) = new_random(Some(5));

        for size in [Dims(4, 6), Dims(2, 2), Dims(1, 1), Dims(0, 0)] {
            let mut grid = Grid::filled(Cell::Wall, size);
            if let Some(cell) = grid.get_mut(Dims(1, 1)) {
                *cell = Cell::Open;
            }
            RecursiveBacktracker::carve(&mut grid, Dims(1, 1), &mut rng);
        }
    }
}
