use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while running a migration step.
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid migration pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for migration operations
pub type Result<T> = std::result::Result<T, MigrateError>;
