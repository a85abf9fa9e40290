//! Diagnostic logging to standard error.
//!
//! Installs a [`log`] backend whose level comes from the `MMAP_LEN_LOG`
//! environment variable. Unset or unrecognized values leave logging off,
//! so standard error stays empty unless diagnostics are asked for.

#![allow(clippy::print_stderr)]

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "MMAP_LEN_LOG";

/// Writes `[LEVEL target] message` lines to standard error.
#[derive(Debug)]
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    /// Creates a logger that passes records at or above `level`.
    #[must_use]
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LevelFilter {
        self.level
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record<'_>) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}

/// Parses a level name, case-insensitively.
///
/// Returns [`LevelFilter::Off`] for anything unrecognized.
#[must_use]
pub fn parse_level(value: &str) -> LevelFilter {
    value.trim().parse().unwrap_or(LevelFilter::Off)
}

/// Reads the level from [`LOG_ENV`].
#[must_use]
pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_ENV).map_or(LevelFilter::Off, |v| parse_level(&v))
}

/// Installs the stderr logger as the global `log` backend.
///
/// Does nothing if logging is off or a logger is already installed.
pub fn init() {
    let level = level_from_env();
    if level == LevelFilter::Off {
        return;
    }
    if log::set_boxed_logger(Box::new(StderrLogger::new(level))).is_ok() {
        log::set_max_level(level);
    }
}
