//! Makes the bot talk like Groot.

use crate::filter::ChatResponseFilter;
use crate::store::RoomToggles;
use async_trait::async_trait;
use chat_client::RoomId;

/// Replaces every sentence of an outgoing message with "I am Groot".
///
/// The reply prefix (`:1234 `) survives, as does the 4-space indentation of
/// fixed-font messages. Sentence punctuation is kept.
#[derive(Clone, Default)]
pub struct GrootFilter {
    toggles: RoomToggles,
}

impl GrootFilter {
    pub fn new(toggles: RoomToggles) -> Self {
        Self { toggles }
    }

    /// Turn the filter on or off for a room.
    pub async fn toggle(&self, room_id: RoomId) -> bool {
        self.toggles.toggle(room_id).await
    }
}

#[async_trait]
impl ChatResponseFilter for GrootFilter {
    fn name(&self) -> &str {
        "groot"
    }

    async fn is_enabled(&self, room_id: RoomId) -> bool {
        self.toggles.is_enabled(room_id).await
    }

    fn filter(&self, message: &str) -> String {
        let (prefix, body) = split_reply_prefix(message);
        let fixed_font = is_fixed_font(body);

        let lines: Vec<String> = body
            .split('\n')
            .map(|line| {
                if line.trim().is_empty() {
                    line.to_string()
                } else if fixed_font {
                    "    I am Groot.".to_string()
                } else {
                    groot_line(line)
                }
            })
            .collect();

        format!("{}{}", prefix, lines.join("\n"))
    }
}

fn split_reply_prefix(message: &str) -> (&str, &str) {
    if let Some(rest) = message.strip_prefix(':') {
        let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits > 0 && rest[digits..].starts_with(' ') {
            return message.split_at(digits + 2);
        }
    }
    ("", message)
}

fn is_fixed_font(body: &str) -> bool {
    let mut lines = body.split('\n').filter(|line| !line.trim().is_empty()).peekable();
    lines.peek().is_some() && lines.all(|line| line.starts_with("    "))
}

fn groot_line(line: &str) -> String {
    let mut terminators = Vec::new();
    let mut has_words = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '.' | '!' | '?' => {
                // "?!" and "..." end a single sentence
                while matches!(chars.peek(), Some('.' | '!' | '?')) {
                    chars.next();
                }
                if has_words {
                    terminators.push(c);
                    has_words = false;
                }
            }
            c if c.is_alphanumeric() => has_words = true,
            _ => {}
        }
    }

    if has_words || terminators.is_empty() {
        terminators.push('.');
    }

    terminators
        .iter()
        .map(|t| format!("I am Groot{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}
