mod carver;
mod solver;

use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::{
    dims::Dims,
    grid::{Cell, Grid, GridError},
};
pub use carver::RecursiveBacktracker;
pub use solver::DepthFirstSearch;

/// Random number generator used for carving, seedable so a maze can be reproduced.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Creates the generator for one run, returning it with the seed it was built from.
pub fn new_random(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (Random::seed_from_u64(seed), seed)
}

pub trait MazeCarver {
    /// Opens passages in `grid` starting from the already open cell `start`.
    fn carve(grid: &mut Grid, start: Dims, rng: &mut Random);
}

pub trait PathFinder {
    /// Marks a path from `start` to `exit`, returning whether one was found.
    ///
    /// On failure the grid is left as it was.
    fn find_path_to(grid: &mut Grid, start: Dims, exit: Dims) -> bool;

    /// Same as [`PathFinder::find_path_to`], with the bottom-right corner as the exit.
    fn find_path(grid: &mut Grid, start: Dims) -> bool {
        let exit = grid.exit();
        Self::find_path_to(grid, start, exit)
    }
}

/// Builds a new maze of the given size with the entrance and exit door opened.
pub fn generate<C: MazeCarver>(size: Dims, rng: &mut Random) -> Result<Grid, GridError> {
    let mut grid = Grid::new(size)?;

    let start = grid.start();
    grid[start] = Cell::Open;
    C::carve(&mut grid, start, rng);

    let (entrance, door) = (grid.entrance(), grid.exit_door());
    grid[entrance] = Cell::Open;
    grid[door] = Cell::Open;

    log::debug!(
        "Carved {} of {} cells in a {}x{} maze",
        grid.carved_count(),
        size.product(),
        size.0,
        size.1
    );

    Ok(grid)
}

/// Searches for a path from the entrance to the exit corner.
pub fn solve<P: PathFinder>(grid: &mut Grid) -> bool {
    let entrance = grid.entrance();
    let found = P::find_path(grid, entrance);

    if found {
        log::debug!("Found a path of {} cells", grid.path_len());
    } else {
        log::debug!("No path from {:?} to {:?}", entrance, grid.exit());
    }

    found
}
