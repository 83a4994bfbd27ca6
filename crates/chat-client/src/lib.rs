//! Chat data model and a console transport for driving the bot locally.

mod error;
mod receiver;
mod sender;
mod types;

pub use error::ChatError;
pub use receiver::ConsoleReceiver;
pub use sender::ConsoleSender;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receiver::parse_line;

    fn message(content: &str) -> ChatMessage {
        ChatMessage::new(1, 42, "tester", content)
    }

    #[test]
    fn test_parse_command_with_args() {
        let cmd = ChatCommand::parse(&message("/advent   123456  "), "/").unwrap();
        assert_eq!(cmd.name, "advent");
        assert_eq!(cmd.content, "123456");
        assert_eq!(cmd.room_id(), 1);
        assert_eq!(cmd.message_id(), 42);
    }

    #[test]
    fn test_parse_command_without_args() {
        let cmd = ChatCommand::parse(&message("/Groot"), "/").unwrap();
        assert_eq!(cmd.name, "groot");
        assert_eq!(cmd.content, "");
    }

    #[test]
    fn test_parse_not_a_command() {
        assert!(ChatCommand::parse(&message("hello there"), "/").is_none());
        assert!(ChatCommand::parse(&message("/"), "/").is_none());
        assert!(ChatCommand::parse(&message("/ groot"), "/").is_none());
    }

    #[test]
    fn test_parse_custom_trigger() {
        let cmd = ChatCommand::parse(&message("!help groot"), "!").unwrap();
        assert_eq!(cmd.name, "help");
        assert_eq!(cmd.content, "groot");
        assert!(ChatCommand::parse(&message("/help"), "!").is_none());
    }

    #[test]
    fn test_reply_prefixes_message_id() {
        let cmd = ChatCommand::parse(&message("/advent"), "/").unwrap();
        let response = ChatResponse::reply(&cmd, "Hi");
        assert_eq!(response.message, ":42 Hi");
        assert_eq!(response.room_id, None);
    }

    #[test]
    fn test_response_in_room() {
        let response = ChatResponse::new("Hi").in_room(9);
        assert_eq!(response.room_id, Some(9));
    }

    #[test]
    fn test_parse_line_default_room() {
        assert_eq!(parse_line("/groot", 1), Some((1, "/groot")));
        assert_eq!(parse_line("   ", 1), None);
    }

    #[test]
    fn test_parse_line_explicit_room() {
        assert_eq!(parse_line("#139 /advent 42", 1), Some((139, "/advent 42")));
        assert_eq!(parse_line("#139", 1), None);
    }

    #[test]
    fn test_parse_line_hash_without_room() {
        assert_eq!(parse_line("#rust is fun", 1), Some((1, "#rust is fun")));
    }
}
