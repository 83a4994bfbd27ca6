//! Routes chat messages to command handlers and filters the replies.

use crate::clock::Clock;
use crate::commands::{AdventHandler, CommandRegistry, GrootHandler, HelpHandler};
use advent_client::AdventOfCodeApi;
use chat_client::{ChatCommand, ChatMessage, ChatResponse, RoomId};
use room_filters::{FilterChain, GrootFilter, RoomToggles};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// A message ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    pub room_id: RoomId,
    pub text: String,
}

pub struct Dispatcher {
    registry: CommandRegistry,
    filters: FilterChain,
    trigger: String,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry, filters: FilterChain, trigger: impl Into<String>) -> Self {
        Self {
            registry,
            filters,
            trigger: trigger.into(),
        }
    }

    /// Build a dispatcher with the bot's standard commands and filters.
    pub fn with_default_commands(
        api: AdventOfCodeApi,
        leaderboard_ids: HashMap<RoomId, String>,
        clock: Arc<dyn Clock>,
        trigger: &str,
    ) -> Self {
        let groot = Arc::new(GrootFilter::new(RoomToggles::new()));

        let mut filters = FilterChain::new();
        filters.add(groot.clone());

        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(GrootHandler::new(groot)));
        registry.register(Arc::new(AdventHandler::new(
            api,
            leaderboard_ids,
            clock,
            trigger,
        )));

        let help = HelpHandler::new(registry.help_docs(), trigger);
        registry.register(Arc::new(help));

        Self::new(registry, filters, trigger)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Handle one incoming message.
    ///
    /// Returns `None` when the message is not a known command or the
    /// command has nothing to say. Handler failures become an apology in
    /// the invoking room.
    #[instrument(skip(self, message), fields(room_id = message.room_id, message_id = message.message_id))]
    pub async fn handle(&self, message: &ChatMessage) -> Option<Outgoing> {
        let command = ChatCommand::parse(message, &self.trigger)?;

        let Some(handler) = self.registry.get(&command.name) else {
            debug!("Unknown command: {}", command.name);
            return None;
        };

        let response = match handler.execute(&command).await {
            Ok(Some(response)) => response,
            Ok(None) => {
                debug!("{} produced no response", handler.name());
                return None;
            }
            Err(e) => {
                error!("Handler error: {}", e);
                ChatResponse::reply(&command, "Sorry, something went wrong.")
            }
        };

        let room_id = response.room_id.unwrap_or(command.room_id());
        let text = self.filters.apply(room_id, &response.message).await;

        Some(Outgoing { room_id, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CommandHandler, HelpDoc};
    use crate::error::{AppError, AppResult};
    use async_trait::async_trait;

    struct FailingHandler;

    #[async_trait]
    impl CommandHandler for FailingHandler {
        fn name(&self) -> &str {
            "fail"
        }

        fn help(&self) -> HelpDoc {
            HelpDoc::new("fail", "Always fails.")
        }

        async fn execute(&self, _command: &ChatCommand) -> AppResult<Option<ChatResponse>> {
            Err(AppError::Config(anyhow::anyhow!("broken")))
        }
    }

    struct ElsewhereHandler;

    #[async_trait]
    impl CommandHandler for ElsewhereHandler {
        fn name(&self) -> &str {
            "elsewhere"
        }

        fn help(&self) -> HelpDoc {
            HelpDoc::new("elsewhere", "Posts in room 99.")
        }

        async fn execute(&self, _command: &ChatCommand) -> AppResult<Option<ChatResponse>> {
            Ok(Some(ChatResponse::new("Over here.").in_room(99)))
        }
    }

    fn dispatcher() -> (Dispatcher, Arc<GrootFilter>) {
        let groot = Arc::new(GrootFilter::default());
        let mut filters = FilterChain::new();
        filters.add(groot.clone());

        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(FailingHandler));
        registry.register(Arc::new(ElsewhereHandler));
        registry.register(Arc::new(GrootHandler::new(groot.clone())));

        (Dispatcher::new(registry, filters, "/"), groot)
    }

    #[tokio::test]
    async fn test_ignores_plain_messages_and_unknown_commands() {
        let (dispatcher, _) = dispatcher();

        assert!(dispatcher.handle(&ChatMessage::new(1, 1, "u", "hello")).await.is_none());
        assert!(dispatcher.handle(&ChatMessage::new(1, 2, "u", "/nope")).await.is_none());
    }

    #[tokio::test]
    async fn test_handler_error_becomes_apology() {
        let (dispatcher, _) = dispatcher();

        let out = dispatcher.handle(&ChatMessage::new(3, 8, "u", "/fail")).await.unwrap();
        assert_eq!(
            out,
            Outgoing {
                room_id: 3,
                text: ":8 Sorry, something went wrong.".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_response_room_overrides_invoking_room() {
        let (dispatcher, groot) = dispatcher();
        groot.toggle(99).await;

        let out = dispatcher.handle(&ChatMessage::new(3, 8, "u", "/elsewhere")).await.unwrap();
        assert_eq!(out.room_id, 99);
        assert_eq!(out.text, "I am Groot.");
    }

    #[tokio::test]
    async fn test_groot_toggle_filters_only_that_room() {
        let (dispatcher, _) = dispatcher();

        assert!(dispatcher.handle(&ChatMessage::new(3, 1, "u", "/groot")).await.is_none());

        let out = dispatcher.handle(&ChatMessage::new(3, 2, "u", "/fail")).await.unwrap();
        assert_eq!(out.text, ":2 I am Groot.");

        let out = dispatcher.handle(&ChatMessage::new(4, 3, "u", "/fail")).await.unwrap();
        assert_eq!(out.text, ":3 Sorry, something went wrong.");

        dispatcher.handle(&ChatMessage::new(3, 4, "u", "/GROOT")).await;
        let out = dispatcher.handle(&ChatMessage::new(3, 5, "u", "/fail")).await.unwrap();
        assert_eq!(out.text, ":5 Sorry, something went wrong.");
    }
}
