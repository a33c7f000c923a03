use std::path::PathBuf;

use claby::grid::GridError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error; {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid maze; {0}")]
    Grid(#[from] GridError),
    #[error("Error reading settings file ({path:?}); {source}")]
    Settings {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("Invalid input; {0}")]
    Input(String),
    #[error("Logger error; {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("Maze worker panicked")]
    WorkerPanicked,
}
