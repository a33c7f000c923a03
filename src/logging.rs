use std::{
    io::Write as _,
    sync::{
        atomic::{AtomicBool, Ordering},
        OnceLock, RwLock,
    },
};

use colored::{ColoredString, Colorize as _};
use log::{Log, Metadata, Record};

use crate::error::Error;

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(log::Level::Warn, true))
}

/// Installs the logger, showing messages up to `level`.
pub fn init(level: log::Level, color: bool) -> Result<(), Error> {
    let logger = get_logger();
    logger.set_min_level(level);
    logger.color.store(color, Ordering::Relaxed);

    log::set_logger(logger)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Formats one log line as `LEVEL source -> message`.
pub fn format_line(level: log::Level, source: &str, message: &str, color: bool) -> String {
    let label = format!("{:<5}", level.as_str());
    if color {
        format!("{} {} -> {}", level_label(level, &label), source.dimmed(), message)
    } else {
        format!("{} {} -> {}", label, source, message)
    }
}

fn level_label(level: log::Level, label: &str) -> ColoredString {
    match level {
        log::Level::Error => label.red(),
        log::Level::Warn => label.yellow(),
        log::Level::Info => label.white(),
        log::Level::Debug => label.blue(),
        log::Level::Trace => label.bright_black(),
    }
}

/// Writes records to stderr, so they never mix with the printed maze.
pub struct AppLogger {
    min_level: RwLock<log::Level>,
    color: AtomicBool,
}

impl AppLogger {
    fn new(min_level: log::Level, color: bool) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            color: AtomicBool::new(color),
        }
    }

    pub fn min_level(&self) -> log::Level {
        // a poisoned lock still holds a valid level
        *self.min_level.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_min_level(&self, level: log::Level) {
        *self.min_level.write().unwrap_or_else(|e| e.into_inner()) = level;
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_line(
                record.level(),
                record.module_path().unwrap_or("unknown"),
                &record.args().to_string(),
                self.color.load(Ordering::Relaxed),
            );
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
