//! Advent of Code API.

use crate::error::AdventError;
use crate::fetch::JsonFetcher;
use crate::types::Leaderboard;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Default Advent of Code site.
pub const DEFAULT_BASE_URL: &str = "http://adventofcode.com";

/// Whether `id` looks like a private leaderboard ID (the owner's numeric
/// user ID). Anything else could rewrite the request path.
pub fn is_valid_leaderboard_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

/// Advent of Code private leaderboard API.
#[derive(Clone)]
pub struct AdventOfCodeApi {
    fetcher: Arc<dyn JsonFetcher>,
    base_url: String,
}

impl AdventOfCodeApi {
    /// Create a new API wrapper on top of a JSON fetcher.
    pub fn new(fetcher: Arc<dyn JsonFetcher>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Web page of a private leaderboard.
    pub fn leaderboard_url(&self, year: i32, leaderboard_id: &str) -> String {
        format!(
            "{}/{}/leaderboard/private/view/{}",
            self.base_url, year, leaderboard_id
        )
    }

    /// JSON document of a private leaderboard.
    pub fn leaderboard_json_url(&self, year: i32, leaderboard_id: &str) -> String {
        format!("{}.json", self.leaderboard_url(year, leaderboard_id))
    }

    /// Fetch a private leaderboard.
    #[instrument(skip(self))]
    pub async fn leaderboard(
        &self,
        year: i32,
        leaderboard_id: &str,
    ) -> Result<Leaderboard, AdventError> {
        if !is_valid_leaderboard_id(leaderboard_id) {
            return Err(AdventError::InvalidLeaderboardId(leaderboard_id.to_string()));
        }

        let url = self.leaderboard_json_url(year, leaderboard_id);
        let json = self.fetcher.get_json(&url).await?;
        let leaderboard: Leaderboard = serde_json::from_value(json)?;

        debug!(
            "Fetched leaderboard {} ({} members)",
            leaderboard_id,
            leaderboard.members.len()
        );
        Ok(leaderboard)
    }
}
