//! Console message receiver.

use crate::types::*;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::Stream;
use tracing::{debug, error};

/// Reads chat messages from stdin, one per line.
///
/// A line of the form `#<room> text` is posted to `<room>`; anything else
/// goes to the default room.
pub struct ConsoleReceiver {
    default_room: RoomId,
    user_name: String,
}

impl ConsoleReceiver {
    /// Create a new console receiver.
    pub fn new(default_room: RoomId, user_name: impl Into<String>) -> Self {
        Self {
            default_room,
            user_name: user_name.into(),
        }
    }

    /// Start receiving messages as an async stream.
    pub fn stream(self) -> impl Stream<Item = ChatMessage> {
        async_stream::stream! {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            let mut next_id: MessageId = 1;

            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        let Some((room_id, content)) = parse_line(&line, self.default_room) else {
                            continue;
                        };

                        let message = ChatMessage::new(room_id, next_id, &self.user_name, content);
                        next_id += 1;

                        debug!("Received: {} in room {}",
                            message.content.chars().take(50).collect::<String>(),
                            message.room_id
                        );
                        yield message;
                    }
                    Ok(None) => {
                        debug!("stdin closed");
                        break;
                    }
                    Err(e) => {
                        error!("Receive error: {}", e);
                        break;
                    }
                }
            }
        }
    }
}

/// Split a console line into its target room and message text.
pub(crate) fn parse_line(line: &str, default_room: RoomId) -> Option<(RoomId, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(rest) = line.strip_prefix('#') {
        let (room, content) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        if let Ok(room_id) = room.parse::<RoomId>() {
            let content = content.trim();
            return (!content.is_empty()).then_some((room_id, content));
        }
    }

    Some((default_room, line))
}
