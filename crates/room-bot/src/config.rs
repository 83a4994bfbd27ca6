//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use chat_client::RoomId;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Bot configuration
    #[serde(default)]
    pub bot: BotConfig,

    /// Advent of Code configuration
    #[serde(default)]
    pub advent: AdventConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Prefix that marks a message as a command
    #[serde(default = "default_trigger")]
    pub trigger: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Room that console input is posted to unless it names another
    #[serde(default = "default_room")]
    pub default_room: RoomId,

    /// Name console input is posted under
    #[serde(default = "default_user_name")]
    pub user_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdventConfig {
    /// Advent of Code site
    #[serde(default = "default_advent_url")]
    pub base_url: String,

    /// adventofcode.com session cookie, needed to view private leaderboards
    #[serde(default)]
    pub session_token: Option<String>,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Default leaderboard ID per room (room ID → leaderboard ID)
    #[serde(default)]
    pub leaderboards: HashMap<String, String>,
}

// Default implementations
impl Default for BotConfig {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
            log_level: default_log_level(),
            default_room: default_room(),
            user_name: default_user_name(),
        }
    }
}

impl Default for AdventConfig {
    fn default() -> Self {
        Self {
            base_url: default_advent_url(),
            session_token: None,
            timeout: default_timeout(),
            leaderboards: HashMap::new(),
        }
    }
}

// Default value functions
fn default_trigger() -> String {
    "/".into()
}

fn default_log_level() -> String {
    "info".into()
}

fn default_room() -> RoomId {
    1
}

fn default_user_name() -> String {
    "console".into()
}

fn default_advent_url() -> String {
    advent_client::DEFAULT_BASE_URL.into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

impl Config {
    /// Load configuration from `room-bot.toml` (optional) and environment
    /// variables, e.g. `ADVENT__LEADERBOARDS__139=123456`.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("room-bot").required(false))
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Leaderboard IDs must stay strings
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings that would make the bot misbehave at runtime.
    pub fn validate(&self) -> Result<()> {
        // An empty trigger would turn every message into a command
        anyhow::ensure!(
            !self.bot.trigger.trim().is_empty(),
            "bot.trigger must not be empty"
        );
        Ok(())
    }

    /// Default leaderboard per room, keyed by parsed room ID.
    pub fn leaderboard_ids(&self) -> Result<HashMap<RoomId, String>> {
        self.advent
            .leaderboards
            .iter()
            .filter(|(_, leaderboard_id)| !leaderboard_id.trim().is_empty())
            .map(|(room, leaderboard_id)| {
                let room_id = room
                    .trim()
                    .parse::<RoomId>()
                    .with_context(|| format!("Invalid room ID in advent.leaderboards: {:?}", room))?;
                let leaderboard_id = leaderboard_id.trim();
                anyhow::ensure!(
                    advent_client::is_valid_leaderboard_id(leaderboard_id),
                    "Invalid leaderboard ID for room {}: {:?}",
                    room_id,
                    leaderboard_id
                );
                Ok((room_id, leaderboard_id.to_string()))
            })
            .collect()
    }
}
