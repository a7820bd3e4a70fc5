//! Error types for the Cinos CLI.

use std::path::PathBuf;

use cinos_core::CoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Everything that can stop a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Menu lookup or validation failure from the pricing model.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl CliError {
    /// Process exit code: 2 for unknown menu names, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Core(err) if err.is_unknown_name() => 2,
            _ => 1,
        }
    }
}
