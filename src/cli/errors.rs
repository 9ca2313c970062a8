//! CLI-specific error types

use std::path::PathBuf;

use thiserror::Error;

use crate::http_server::ConfigError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("config file already exists: {0}")]
    AlreadyInitialized(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server failed: {0}")]
    Server(String),
}
