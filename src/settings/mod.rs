use std::{
    fs,
    path::{Path, PathBuf},
};

use claby::grid::Cell;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};

use crate::error::Error;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");
const DEFAULT_STACK_SIZE_MIB: usize = 64;
const MAX_STACK_SIZE_MIB: usize = 16 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    pub wall: char,
    pub open: char,
    pub path: char,
    pub exit: char,
}

impl Symbols {
    pub fn of(&self, cell: Cell) -> char {
        match cell {
            Cell::Wall => self.wall,
            Cell::Open => self.open,
            Cell::Visited => self.path,
            Cell::Exit => self.exit,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols {
            wall: Cell::Wall.symbol(),
            open: Cell::Open.symbol(),
            path: Cell::Visited.symbol(),
            exit: Cell::Exit.symbol(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const ORDER: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// More verbose by `steps` levels, saturating at [`LogLevel::Trace`].
    pub fn raised(self, steps: u8) -> LogLevel {
        let idx = self as usize + steps as usize;
        Self::ORDER[idx.min(Self::ORDER.len() - 1)]
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub color: Option<bool>,
    #[serde(default)]
    pub symbols: Option<Symbols>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    #[serde(default)]
    pub stack_size_mib: Option<usize>,
}

impl Settings {
    pub fn set_color(mut self, value: bool) -> Self {
        self.color = Some(value);
        self
    }

    pub fn get_color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn get_symbols(&self) -> Symbols {
        self.symbols.unwrap_or_default()
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn get_stack_size_mib(&self) -> usize {
        self.stack_size_mib
            .unwrap_or(DEFAULT_STACK_SIZE_MIB)
            .clamp(1, MAX_STACK_SIZE_MIB)
    }

    pub fn default_path() -> PathBuf {
        dirs::preference_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("laby")
            .join("settings.ron")
    }

    pub fn parse(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(source)
    }

    /// Reads settings from `path`, writing the defaults there first if the file is missing.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            Self::reset_config(path)?;
        }

        let source = fs::read_to_string(path)?;
        Self::parse(&source).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn reset_config(path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}
