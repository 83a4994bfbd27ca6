//! Outgoing message filters.

use async_trait::async_trait;
use chat_client::RoomId;
use std::sync::Arc;
use tracing::debug;

/// Rewrites outgoing text in the rooms where it is enabled.
#[async_trait]
pub trait ChatResponseFilter: Send + Sync {
    /// Filter name, for logging.
    fn name(&self) -> &str;

    /// Whether the filter applies to messages posted in this room.
    async fn is_enabled(&self, room_id: RoomId) -> bool;

    /// Rewrite a message.
    fn filter(&self, message: &str) -> String;
}

/// Ordered set of filters applied to everything the bot posts.
#[derive(Clone, Default)]
pub struct FilterChain {
    filters: Vec<Arc<dyn ChatResponseFilter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter. Filters run in the order they were added.
    pub fn add(&mut self, filter: Arc<dyn ChatResponseFilter>) {
        self.filters.push(filter);
    }

    /// Run every filter enabled for `room_id` over `message`.
    pub async fn apply(&self, room_id: RoomId, message: &str) -> String {
        let mut message = message.to_string();
        for filter in &self.filters {
            if filter.is_enabled(room_id).await {
                debug!("Applying {} filter in room {}", filter.name(), room_id);
                message = filter.filter(&message);
            }
        }
        message
    }
}
