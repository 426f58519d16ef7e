use std::fmt;

use log::Level;

/// Log target used when a [`ReportedError`] is constructed.
pub const ERROR_TARGET: &str = "prism::error";

/// Severity prefix used in messages shown to the user.
pub fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "[ERROR] ",
        Level::Warn => "[WARN] ",
        Level::Info => "[INFO] ",
        Level::Debug => "[DEBUG] ",
        Level::Trace => "[TRACE] ",
    }
}

/// Error that reports itself through the `log` facade when created.
///
/// The stored message carries the severity label, so `to_string()` is ready
/// for display (`"[ERROR] shader compile failed"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedError {
    level: Level,
    message: String,
}

impl ReportedError {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        let message = message.into();
        log::log!(target: ERROR_TARGET, level, "{message}");
        Self {
            message: format!("{}{message}", level_label(level)),
            level,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(Level::Warn, message)
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Message including the level prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ReportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ReportedError {}
