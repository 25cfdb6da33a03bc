//! Logging configuration

use serde::Deserialize;

/// Logging settings
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `folio=debug,warn`
    pub filter: String,
    /// Entries kept in the in-memory ring buffer
    pub buffer_size: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            buffer_size: 500,
        }
    }
}

/// Logging settings as loaded from config
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileLogging {
    pub filter: Option<String>,
    pub buffer_size: Option<usize>,
}

impl LoggingConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            filter: file.filter.unwrap_or(defaults.filter),
            buffer_size: file.buffer_size.unwrap_or(defaults.buffer_size),
        }
    }
}
