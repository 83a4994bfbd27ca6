//! In-memory per-room toggle state.

use chat_client::RoomId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Per-room on/off flags, shared across handlers and filters.
///
/// Rooms start out disabled. State lives for the lifetime of the process
/// and is never persisted.
#[derive(Clone, Default)]
pub struct RoomToggles {
    rooms: Arc<RwLock<HashMap<RoomId, bool>>>,
}

impl RoomToggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for a room, returning the new state.
    #[instrument(skip(self))]
    pub async fn toggle(&self, room_id: RoomId) -> bool {
        let mut rooms = self.rooms.write().await;
        let enabled = rooms.entry(room_id).or_insert(false);
        *enabled = !*enabled;

        debug!("Room {} toggled {}", room_id, if *enabled { "on" } else { "off" });
        *enabled
    }

    pub async fn is_enabled(&self, room_id: RoomId) -> bool {
        self.rooms
            .read()
            .await
            .get(&room_id)
            .copied()
            .unwrap_or(false)
    }

}
