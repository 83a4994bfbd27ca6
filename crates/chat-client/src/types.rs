//! Chat data model shared by the transport and the bot.

/// Identifier of a chat room.
pub type RoomId = u64;

/// Identifier of a single chat message.
pub type MessageId = u64;

/// A message posted to a chat room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// The room the message was posted in.
    pub room_id: RoomId,
    /// The message's id.
    pub message_id: MessageId,
    /// Display name of the author.
    pub user_name: String,
    /// Raw message text.
    pub content: String,
}

impl ChatMessage {
    pub fn new(
        room_id: RoomId,
        message_id: MessageId,
        user_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            room_id,
            message_id,
            user_name: user_name.into(),
            content: content.into(),
        }
    }
}

/// A chat message addressed to the bot, e.g. `/advent 123456`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCommand {
    /// The message that carried the command.
    pub message: ChatMessage,
    /// Lower-cased command name, without the trigger.
    pub name: String,
    /// Trimmed argument text (may be empty).
    pub content: String,
}

impl ChatCommand {
    /// Parse a command out of a message.
    ///
    /// Returns `None` if the message does not start with `trigger` or if no
    /// command name follows it.
    pub fn parse(message: &ChatMessage, trigger: &str) -> Option<Self> {
        let rest = message.content.trim_start().strip_prefix(trigger)?;

        let (name, content) = match rest.split_once(char::is_whitespace) {
            Some((name, content)) => (name, content.trim()),
            None => (rest.trim_end(), ""),
        };

        if name.is_empty() {
            return None;
        }

        Some(Self {
            message: message.clone(),
            name: name.to_lowercase(),
            content: content.to_string(),
        })
    }

    pub fn room_id(&self) -> RoomId {
        self.message.room_id
    }

    pub fn message_id(&self) -> MessageId {
        self.message.message_id
    }
}

/// Text the bot wants to post in response to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    /// Message text.
    pub message: String,
    /// Room to post in. `None` means the room the command came from.
    pub room_id: Option<RoomId>,
}

impl ChatResponse {
    /// A plain message posted to the invoking room.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            room_id: None,
        }
    }

    /// A reply to the command's message (`:{message_id} {text}`).
    pub fn reply(command: &ChatCommand, text: impl AsRef<str>) -> Self {
        Self::new(format!(":{} {}", command.message_id(), text.as_ref()))
    }

    /// Post this response to a specific room instead.
    pub fn in_room(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }
}
