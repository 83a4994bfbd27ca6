//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Advent of Code error: {0}")]
    Advent(#[from] advent_client::AdventError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
