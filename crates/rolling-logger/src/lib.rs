//! Rolling Logger
//!
//! A `log` backend that keeps the most recent formatted lines in a circular
//! buffer and forwards every line to a pluggable sink (browser console,
//! stderr, ...).

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Where formatted lines go besides the ring buffer
pub type Sink = fn(Level, &str);

/// Logger settings
#[derive(Clone)]
pub struct LoggerConfig {
    /// Most verbose level that is recorded
    pub level: LevelFilter,
    /// Number of lines kept in memory
    pub capacity: usize,
    pub sink: Option<Sink>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            capacity: 500,
            sink: None,
        }
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    sink: Option<Sink>,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            level: config.level,
            capacity: config.capacity.max(1),
            sink: config.sink,
            lines: Mutex::new(VecDeque::with_capacity(config.capacity.max(1))),
        }
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

pub fn format_line(record: &Record<'_>) -> String {
    format!(
        "{} {:<5} {}: {}",
        chrono::Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        if let Some(sink) = self.sink {
            sink(record.level(), &line);
        }
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Fails if a logger is already set.
pub fn init(config: LoggerConfig) -> Result<&'static RollingLogger, SetLoggerError> {
    let level = config.level;
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(config)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_keeps_only_the_newest_lines() {
        let logger = RollingLogger::new(LoggerConfig {
            level: LevelFilter::Debug,
            capacity: 2,
            sink: None,
        });
        emit(&logger, Level::Info, "one");
        emit(&logger, Level::Info, "two");
        emit(&logger, Level::Info, "three");

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("test: two"));
        assert!(lines[1].ends_with("test: three"));
    }

    #[test]
    fn test_filters_below_level() {
        let logger = RollingLogger::new(LoggerConfig {
            level: LevelFilter::Warn,
            ..Default::default()
        });
        emit(&logger, Level::Info, "quiet");
        emit(&logger, Level::Error, "loud");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
    }

    #[test]
    fn test_zero_capacity_still_keeps_one_line() {
        let logger = RollingLogger::new(LoggerConfig {
            capacity: 0,
            ..Default::default()
        });
        emit(&logger, Level::Info, "a");
        emit(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
    }
}
