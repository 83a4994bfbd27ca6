//! Advent of Code private leaderboard client.

mod client;
mod error;
mod fetch;
mod format;
mod types;

pub use client::{is_valid_leaderboard_id, AdventOfCodeApi, DEFAULT_BASE_URL};
pub use error::AdventError;
pub use fetch::{HttpJsonFetcher, JsonFetcher};
pub use format::{format_leaderboard, standings, star_grid, Standing};
pub use types::*;
