pub mod algorithms;
pub mod dims;
pub mod grid;
