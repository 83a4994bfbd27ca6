//! Groot command - toggles the Groot filter in the current room.

use crate::commands::{CommandHandler, HelpDoc};
use crate::error::AppResult;
use async_trait::async_trait;
use chat_client::{ChatCommand, ChatResponse};
use room_filters::GrootFilter;
use std::sync::Arc;
use tracing::info;

pub struct GrootHandler {
    filter: Arc<GrootFilter>,
}

impl GrootHandler {
    pub fn new(filter: Arc<GrootFilter>) -> Self {
        Self { filter }
    }
}

#[async_trait]
impl CommandHandler for GrootHandler {
    fn name(&self) -> &str {
        "groot"
    }

    fn help(&self) -> HelpDoc {
        HelpDoc::new("groot", "I am Groot.")
            .detail("Toggles a filter that makes the bot speak in Groot.")
            .include_summary_with_detail(false)
    }

    async fn execute(&self, command: &ChatCommand) -> AppResult<Option<ChatResponse>> {
        let room_id = command.room_id();
        let enabled = self.filter.toggle(room_id).await;
        info!("Groot filter {} in room {}", if enabled { "enabled" } else { "disabled" }, room_id);

        Ok(None)
    }
}
