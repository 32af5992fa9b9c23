// ABOUTME: Application-wide error types for hostconfig.
// ABOUTME: Uses thiserror; only the codec and file loading can fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("host config file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("unsupported host config file extension: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
