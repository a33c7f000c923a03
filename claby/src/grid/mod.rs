pub mod cell;
#[allow(clippy::module_inception)]
pub mod grid;

pub use cell::{Cell, Direction};
pub use grid::{Grid, GridError, MIN_SIDE};
