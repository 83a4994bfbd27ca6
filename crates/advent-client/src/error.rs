//! Advent of Code client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdventError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid leaderboard ID: {0:?}")]
    InvalidLeaderboardId(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
