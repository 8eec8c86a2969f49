//! Logger utility for application-wide logging
//!
//! This module provides a logger that works alongside the standard log
//! crate, writing every record both to a log file and to the console.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{info, Log, Record, Metadata, LevelFilter};

use crate::bounds::Limits;

/// File-backed logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level written
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        Self::with_level(log_file, LevelFilter::Debug)
    }

    /// Creates a logger that only records messages up to `level`
    pub fn with_level(log_file: &str, level: LevelFilter) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
        })
    }

    /// Creates a logger without a file of its own
    ///
    /// Messages go through the `log` facade instead, so they end up wherever
    /// the global logger writes (e.g. the `--log-file` target).
    pub fn forwarding() -> Self {
        Logger {
            file: Mutex::new(None),
            level: LevelFilter::Debug,
        }
    }

    /// Logs a message to the log file, or forwards it when there is none
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        match &mut *guard {
            Some(file) => {
                writeln!(file, "{}", message)?;
                file.flush()?;
            }
            None => info!("{}", message),
        }
        Ok(())
    }

    /// Logs the limits of a ROI collection, or their absence
    pub fn log_limits(&self, limits: Option<&Limits>) -> io::Result<()> {
        match limits {
            Some(l) => self.log(&format!("Stack limits: {}", l)),
            None => self.log("Stack limits: no valid ROIs"),
        }
    }

    /// Logs the ROIs selected on each plane in a formatted way
    ///
    /// # Arguments
    ///
    /// * `selection` - `(slice, ROI names)` pairs in plane order
    pub fn log_slice_selection(&self, selection: &[(usize, Vec<String>)]) -> io::Result<()> {
        self.log("ROIs per slice:")?;

        for (slice, names) in selection {
            let message = format!("  Slice {}: {} ROIs [{}]", slice, names.len(), names.join(", "));
            self.log(&message)?;
        }

        Ok(())
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::with_level(log_file, level)?;

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Also print to console
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_file_logger_writes_reports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.log");
        let logger = Logger::new(path.to_str().unwrap()).unwrap();

        logger.log_limits(None).unwrap();
        logger.log_slice_selection(&[(2, vec!["0002-0000-0001".to_string()])]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Stack limits: no valid ROIs\nROIs per slice:\n  Slice 2: 1 ROIs [0002-0000-0001]\n"
        );
    }

    #[test]
    fn test_forwarding_logger_has_no_file() {
        let logger = Logger::forwarding();

        logger.log("Stack limits: no valid ROIs").unwrap();
        logger.log_limits(None).unwrap();
        assert!(logger.file.lock().unwrap().is_none());
    }
}
