//! Errors that can occur while reading, writing or applying the configuration.

use std::path::PathBuf;

use thiserror::Error;

/// The errors that can happen when reading a configuration directory.
#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}:{line}:{column}: {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("unsupported configuration version {version} in {file_path}, expected \"1\"")]
    UnsupportedVersion { file_path: PathBuf, version: String },
    #[error("{file_path}: {error}")]
    IoError {
        file_path: PathBuf,
        error: std::io::Error,
    },
}

/// The errors that can happen when writing a configuration directory.
#[derive(Debug, Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// The errors that can happen when applying a configuration to a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("collection '{0}' is not configured")]
    CollectionNotFound(String),
}
