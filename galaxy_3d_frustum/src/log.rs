//! Internal logging system for Galaxy3D Frustum
//!
//! This module provides a flexible logging system with:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - Optional forwarding to the `log` facade
//! - A minimum severity filter checked before any message is formatted
//! - File and line information for detailed ERROR logs

use colored::*;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Lowest severity that reaches the logger
static MIN_SEVERITY: AtomicU8 = AtomicU8::new(LogSeverity::Info as u8);

/// Logger trait for custom logging implementations
///
/// Implement this trait to route frustum diagnostics elsewhere (file, in-game console, ...)
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_frustum::galaxy3d::log::{self, Logger, LogEntry};
///
/// struct ConsoleOverlay;
///
/// impl Logger for ConsoleOverlay {
///     fn log(&self, entry: &LogEntry) {
///         // Push to overlay...
///     }
/// }
///
/// log::set_logger(ConsoleOverlay);
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    ///
    /// # Arguments
    ///
    /// * `entry` - The log entry to process
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "galaxy3d::Frustum")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogSeverity {
    /// Very verbose debug information (per-frame plane updates)
    Trace = 0,

    /// Development/debugging information
    Debug = 1,

    /// Important informational messages
    Info = 2,

    /// Warning messages (caller contract violations)
    Warn = 3,

    /// Error messages (rejected input, with file:line details)
    Error = 4,
}

impl LogSeverity {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => LogSeverity::Trace,
            1 => LogSeverity::Debug,
            2 => LogSeverity::Info,
            3 => LogSeverity::Warn,
            _ => LogSeverity::Error,
        }
    }
}

impl From<LogSeverity> for ::log::Level {
    fn from(severity: LogSeverity) -> Self {
        match severity {
            LogSeverity::Trace => ::log::Level::Trace,
            LogSeverity::Debug => ::log::Level::Debug,
            LogSeverity::Info => ::log::Level::Info,
            LogSeverity::Warn => ::log::Level::Warn,
            LogSeverity::Error => ::log::Level::Error,
        }
    }
}

/// Default logger implementation using colored console output
///
/// Colors:
/// - Trace: bright_black
/// - Debug: Cyan
/// - Info: Green
/// - Warn: Yellow
/// - Error: red + bold
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        // Format timestamp as YYYY-MM-DD HH:MM:SS.mmm
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

/// Logger that forwards every entry to the `log` facade.
///
/// Use this when the host application already installs a `log` backend
/// (env_logger, tracing-log, ...) and frustum diagnostics should end up there.
/// The entry source becomes the `log` target.
pub struct LogCrateLogger;

impl Logger for LogCrateLogger {
    fn log(&self, entry: &LogEntry) {
        let level: ::log::Level = entry.severity.into();
        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            ::log::log!(target: entry.source.as_str(), level, "{} ({}:{})", entry.message, file, line);
        } else {
            ::log::log!(target: entry.source.as_str(), level, "{}", entry.message);
        }
    }
}

// ===== GLOBAL LOGGER API =====

fn logger_slot() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Replace the current logger
pub fn set_logger<L: Logger + 'static>(logger: L) {
    if let Ok(mut lock) = logger_slot().write() {
        *lock = Box::new(logger);
    }
}

/// Reset logger to default (DefaultLogger)
pub fn reset_logger() {
    if let Ok(mut lock) = logger_slot().write() {
        *lock = Box::new(DefaultLogger);
    }
}

/// Set the lowest severity that reaches the logger (default: Info)
pub fn set_min_severity(severity: LogSeverity) {
    MIN_SEVERITY.store(severity as u8, Ordering::Relaxed);
}

/// Current minimum severity
pub fn min_severity() -> LogSeverity {
    LogSeverity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
}

/// Whether a message of this severity would reach the logger.
///
/// The `frustum_*!` macros check this before formatting, so disabled
/// levels cost one atomic load.
#[inline]
pub fn enabled(severity: LogSeverity) -> bool {
    severity as u8 >= MIN_SEVERITY.load(Ordering::Relaxed)
}

/// Logging entry point (for simple logs without file:line)
///
/// Used by macros like frustum_info!, frustum_warn!, etc.
///
/// # Arguments
///
/// * `severity` - Log severity level
/// * `source` - Source module (e.g., "galaxy3d::Frustum")
/// * `message` - Log message
pub fn log(severity: LogSeverity, source: &str, message: String) {
    if !enabled(severity) {
        return;
    }
    if let Ok(lock) = logger_slot().read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }
}

/// Logging entry point with file:line information (for ERROR logs)
///
/// Used by frustum_error! macro to include source location.
pub fn log_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    if !enabled(severity) {
        return;
    }
    if let Ok(lock) = logger_slot().read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, typically disabled)
///
/// # Example
///
/// ```no_run
/// galaxy_3d_frustum::frustum_trace!("galaxy3d::Frustum", "Updated {} planes", 6);
/// ```
#[macro_export]
macro_rules! frustum_trace {
    ($source:expr, $($arg:tt)*) => {
        if $crate::log::enabled($crate::log::LogSeverity::Trace) {
            $crate::log::log(
                $crate::log::LogSeverity::Trace,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a DEBUG message (development information)
#[macro_export]
macro_rules! frustum_debug {
    ($source:expr, $($arg:tt)*) => {
        if $crate::log::enabled($crate::log::LogSeverity::Debug) {
            $crate::log::log(
                $crate::log::LogSeverity::Debug,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an INFO message (important events)
#[macro_export]
macro_rules! frustum_info {
    ($source:expr, $($arg:tt)*) => {
        if $crate::log::enabled($crate::log::LogSeverity::Info) {
            $crate::log::log(
                $crate::log::LogSeverity::Info,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a WARN message (caller contract violations)
///
/// # Example
///
/// ```no_run
/// galaxy_3d_frustum::frustum_warn!("galaxy3d::Frustum", "near plane {} is not positive", 0.0);
/// ```
#[macro_export]
macro_rules! frustum_warn {
    ($source:expr, $($arg:tt)*) => {
        if $crate::log::enabled($crate::log::LogSeverity::Warn) {
            $crate::log::log(
                $crate::log::LogSeverity::Warn,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! frustum_error {
    ($source:expr, $($arg:tt)*) => {
        if $crate::log::enabled($crate::log::LogSeverity::Error) {
            $crate::log::log_detailed(
                $crate::log::LogSeverity::Error,
                $source,
                format!($($arg)*),
                file!(),
                line!()
            )
        }
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
