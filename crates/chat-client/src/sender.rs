//! Console message sender.

use crate::error::ChatError;
use crate::types::RoomId;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Posts messages by printing them to stdout.
pub struct ConsoleSender {
    out: Mutex<Stdout>,
}

impl ConsoleSender {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(tokio::io::stdout()),
        }
    }

    /// Post a message to a room.
    #[instrument(skip(self, message))]
    pub async fn send(&self, room_id: RoomId, message: &str) -> Result<(), ChatError> {
        let mut out = self.out.lock().await;
        out.write_all(render(room_id, message).as_bytes()).await?;
        out.flush().await?;

        debug!("Sent message to room {}", room_id);
        Ok(())
    }
}

impl Default for ConsoleSender {
    fn default() -> Self {
        Self::new()
    }
}

fn render(room_id: RoomId, message: &str) -> String {
    if message.contains('\n') {
        format!("[room {}]\n{}\n", room_id, message.trim_end_matches('\n'))
    } else {
        format!("[room {}] {}\n", room_id, message)
    }
}
