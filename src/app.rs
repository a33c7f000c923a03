use std::{
    io::{BufRead, Write},
    thread,
};

use claby::{
    algorithms::{generate, new_random, solve, DepthFirstSearch, RecursiveBacktracker},
    dims::Dims,
    grid::Grid,
};

use crate::{error::Error, input, render::Renderer, settings::Settings};

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Maze size; asked for interactively when missing.
    pub size: Option<Dims>,
    pub seed: Option<u64>,
}

/// Generates a maze, prints it, solves it and prints the solution.
///
/// A maze without a solution is not an error, only a notice in the output.
pub fn run<R: BufRead, W: Write>(
    settings: &Settings,
    options: Options,
    input: &mut R,
    output: &mut W,
) -> Result<(), Error> {
    let size = match options.size {
        Some(size) => size,
        None => input::read_size(input, output)?,
    };

    let (mut rng, seed) = new_random(options.seed);
    log::info!("Generating a {}x{} maze with seed {}", size.0, size.1, seed);

    let stack_size = settings.get_stack_size_mib();
    let renderer = Renderer::from_settings(settings);

    let grid = on_worker(stack_size, move || {
        generate::<RecursiveBacktracker>(size, &mut rng)
    })??;
    write_generated(output, &renderer, &grid)?;

    let (grid, found) = on_worker(stack_size, move || {
        let mut grid = grid;
        let found = solve::<DepthFirstSearch>(&mut grid);
        (grid, found)
    })?;
    write_solution(output, &renderer, found.then_some(&grid))?;

    Ok(())
}

/// Runs `job` on a separate thread with a stack of `stack_size_mib` MiB.
///
/// Both maze phases recurse once per cell, so big mazes overflow the default stack.
fn on_worker<T, F>(stack_size_mib: usize, job: F) -> Result<T, Error>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    thread::Builder::new()
        .name("maze".into())
        .stack_size(stack_size_mib.max(1).saturating_mul(1024 * 1024))
        .spawn(job)?
        .join()
        .map_err(|_| Error::WorkerPanicked)
}

pub fn write_generated<W: Write>(output: &mut W, renderer: &Renderer, grid: &Grid) -> Result<(), Error> {
    writeln!(output, "Generated maze:")?;
    write!(output, "{}", renderer.render(grid))?;
    writeln!(output)?;
    Ok(())
}

pub fn write_solution<W: Write>(
    output: &mut W,
    renderer: &Renderer,
    solved: Option<&Grid>,
) -> Result<(), Error> {
    match solved {
        Some(grid) => {
            writeln!(output, "Maze with solution:")?;
            write!(output, "{}", renderer.render(grid))?;
        }
        None => writeln!(output, "No solution found.")?,
    }
    Ok(())
}
