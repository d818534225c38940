//! Error types for dataset loading, selection handling and configuration.

use std::path::PathBuf;

/// Error raised while loading the launch dataset.
///
/// Any of these is fatal at startup: the dashboard must not be served without
/// a complete dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("Failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Invalid value in column '{column}' at row {row}: {reason}")]
    InvalidValue {
        row: usize,
        column: String,
        reason: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] polars::prelude::PolarsError),

    #[error("JSON error at '{path}': {message}")]
    Json { path: String, message: String },

    #[error("Dataset contains no launch records")]
    Empty,
}

impl DataLoadError {
    pub(crate) fn invalid(row: usize, column: &str, reason: impl Into<String>) -> Self {
        DataLoadError::InvalidValue {
            row,
            column: column.to_string(),
            reason: reason.into(),
        }
    }
}

/// Error raised when a selection cannot be applied.
///
/// A rejected selection leaves the previous snapshot in place.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    #[error("Unknown launch site: {0}")]
    UnknownSite(String),

    #[error("Payload bound is not a finite number: {0}")]
    NonFiniteBound(f64),
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(String),

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Error returned by the dashboard driver handle.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Dashboard driver has stopped")]
    Stopped,

    #[error("Dashboard driver task failed: {0}")]
    Join(String),
}

impl From<tokio::task::JoinError> for DriverError {
    fn from(e: tokio::task::JoinError) -> Self {
        DriverError::Join(e.to_string())
    }
}

/// Error returned by a render sink.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Render target is closed")]
    Closed,

    #[error("Render failed: {0}")]
    Failed(String),
}
