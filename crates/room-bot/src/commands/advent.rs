//! Advent command - displays an Advent of Code private leaderboard.

use crate::clock::Clock;
use crate::commands::{CommandHandler, HelpDoc};
use crate::error::AppResult;
use advent_client::{format_leaderboard, is_valid_leaderboard_id, AdventError, AdventOfCodeApi};
use async_trait::async_trait;
use chat_client::{ChatCommand, ChatResponse, RoomId};
use chrono::Datelike;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

/// Advent of Code runs in December.
const ACTIVE_MONTH: u32 = 12;

pub struct AdventHandler {
    api: AdventOfCodeApi,
    leaderboard_ids: HashMap<RoomId, String>,
    clock: Arc<dyn Clock>,
    trigger: String,
}

impl AdventHandler {
    pub fn new(
        api: AdventOfCodeApi,
        leaderboard_ids: HashMap<RoomId, String>,
        clock: Arc<dyn Clock>,
        trigger: impl Into<String>,
    ) -> Self {
        Self {
            api,
            leaderboard_ids,
            clock,
            trigger: trigger.into(),
        }
    }

    /// The leaderboard named in the command, falling back to the room's default.
    ///
    /// Returns `None` when there is neither, or when the given ID is not a
    /// leaderboard ID (IDs are numeric and end up in the request path).
    fn leaderboard_id(&self, command: &ChatCommand) -> Option<String> {
        let id = match command.content.split_whitespace().next() {
            Some(explicit) => explicit.to_string(),
            None => self.leaderboard_ids.get(&command.room_id())?.clone(),
        };

        is_valid_leaderboard_id(&id).then_some(id)
    }

    fn usage(&self, command: &ChatCommand) -> ChatResponse {
        ChatResponse::reply(
            command,
            format!(
                "Please specify a leaderboard ID (e.g. {}advent 123456).",
                self.trigger
            ),
        )
    }
}

#[async_trait]
impl CommandHandler for AdventHandler {
    fn name(&self) -> &str {
        "advent"
    }

    fn aliases(&self) -> &[&str] {
        &["aoc"]
    }

    fn help(&self) -> HelpDoc {
        HelpDoc::new("advent", "Displays an Advent of Code private leaderboard.").detail(format!(
            "Shows the leaderboard with the given ID, or the room's default leaderboard if none is given. \
             Only active during December. Usage: {}advent [ID]",
            self.trigger
        ))
    }

    async fn execute(&self, command: &ChatCommand) -> AppResult<Option<ChatResponse>> {
        let now = self.clock.now();
        if now.month() != ACTIVE_MONTH {
            return Ok(Some(ChatResponse::reply(
                command,
                "This command is only active during the month of December.",
            )));
        }

        let Some(leaderboard_id) = self.leaderboard_id(command) else {
            return Ok(Some(self.usage(command)));
        };

        let year = now.year();
        debug!("Fetching {} leaderboard {}", year, leaderboard_id);

        match self.api.leaderboard(year, &leaderboard_id).await {
            Ok(leaderboard) => {
                let url = self.api.leaderboard_url(year, &leaderboard_id);
                Ok(Some(ChatResponse::new(format_leaderboard(&leaderboard, &url))))
            }
            Err(e) => {
                error!("Failed to fetch leaderboard {}: {}", leaderboard_id, e);
                let text = match e {
                    AdventError::Api { status, .. } => {
                        format!("Sorry, I couldn't get the leaderboard (HTTP {}).", status)
                    }
                    _ => "Sorry, I couldn't get the leaderboard.".to_string(),
                };
                Ok(Some(ChatResponse::reply(command, text)))
            }
        }
    }
}
