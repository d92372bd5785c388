//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading snapshot tables
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Schema error in {path}: {detail}")]
    Schema { path: PathBuf, detail: String },
}

/// Errors that can occur while loading or validating a similarity mapping
#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Failed to read mapping file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Mapping JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid mapping entry: {0}")]
    InvalidEntry(String),

    #[error("Chained mapping: '{from}' -> '{via}' -> '{to}' (mappings are single-step)")]
    ChainedMapping {
        from: String,
        via: String,
        to: String,
    },
}

/// Errors that can occur during coverage ranking
#[derive(Error, Debug, PartialEq)]
pub enum CoverageError {
    #[error("Cannot compute coverage: table has zero total count")]
    EmptyTable,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Failed to move finished file into place: {0}")]
    PersistFailed(#[from] tempfile::PersistError),
}

/// Errors that can occur while loading the analysis config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
