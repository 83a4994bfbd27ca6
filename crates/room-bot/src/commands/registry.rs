//! Registry of available commands.

use crate::commands::{CommandHandler, HelpDoc};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Maps command names and aliases to handlers.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    /// Handlers in registration order.
    handlers: Vec<Arc<dyn CommandHandler>>,
    by_name: HashMap<String, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its name and aliases.
    ///
    /// A name that is already taken is reassigned to the new handler. A
    /// handler left without any name is dropped.
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) {
        let names = std::iter::once(handler.name()).chain(handler.aliases().iter().copied());
        for name in names {
            let name = name.to_lowercase();
            if self.by_name.insert(name.clone(), handler.clone()).is_some() {
                warn!("Command name {:?} registered twice, keeping the latest", name);
            }
        }

        self.handlers.push(handler);

        let by_name = &self.by_name;
        self.handlers
            .retain(|h| by_name.values().any(|named| same_handler(named, h)));
    }

    /// Look up a handler by name or alias (case-insensitive).
    pub fn get(&self, name: &str) -> Option<Arc<dyn CommandHandler>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Help for every registered handler, sorted by name.
    ///
    /// Only aliases that still resolve to the handler are listed.
    pub fn help_docs(&self) -> Vec<HelpDoc> {
        let mut docs: Vec<HelpDoc> = self
            .handlers
            .iter()
            .map(|h| {
                let aliases = h.aliases().iter().copied().filter(|alias| {
                    self.get(alias)
                        .is_some_and(|named| same_handler(&named, h))
                });
                h.help().aliases(aliases)
            })
            .collect();
        docs.sort_by(|a, b| a.name.cmp(&b.name));
        docs
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

fn same_handler(a: &Arc<dyn CommandHandler>, b: &Arc<dyn CommandHandler>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppResult;
    use async_trait::async_trait;
    use chat_client::{ChatCommand, ChatResponse};

    struct EchoHandler {
        name: &'static str,
        aliases: &'static [&'static str],
    }

    #[async_trait]
    impl CommandHandler for EchoHandler {
        fn name(&self) -> &str {
            self.name
        }

        fn aliases(&self) -> &[&str] {
            self.aliases
        }

        fn help(&self) -> HelpDoc {
            HelpDoc::new(self.name, "Echoes.")
        }

        async fn execute(&self, command: &ChatCommand) -> AppResult<Option<ChatResponse>> {
            Ok(Some(ChatResponse::new(format!("{}: {}", self.name, command.content))))
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(EchoHandler { name: "echo", aliases: &["say"] }));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("echo").unwrap().name(), "echo");
        assert_eq!(registry.get("say").unwrap().name(), "echo");
        assert_eq!(registry.get("ECHO").unwrap().name(), "echo");
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn test_later_registration_wins() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(EchoHandler { name: "echo", aliases: &[] }));
        registry.register(Arc::new(EchoHandler { name: "shout", aliases: &["echo"] }));

        assert_eq!(registry.get("echo").unwrap().name(), "shout");

        // "echo" lost its only name
        assert_eq!(registry.len(), 1);
        let docs = registry.help_docs();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, "shout");
        assert_eq!(docs[0].aliases, vec!["echo"]);
    }

    #[test]
    fn test_partially_shadowed_handler_is_kept() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(EchoHandler { name: "echo", aliases: &["say"] }));
        registry.register(Arc::new(EchoHandler { name: "say", aliases: &[] }));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("echo").unwrap().name(), "echo");
        assert_eq!(registry.get("say").unwrap().name(), "say");

        let docs = registry.help_docs();
        let echo = docs.iter().find(|doc| doc.name == "echo").unwrap();
        assert!(echo.aliases.is_empty());
    }

    #[test]
    fn test_help_docs_carry_aliases() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(EchoHandler { name: "echo", aliases: &["say", "repeat"] }));

        assert_eq!(registry.help_docs()[0].aliases, vec!["say", "repeat"]);
    }

    #[test]
    fn test_help_docs_sorted() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(EchoHandler { name: "zeta", aliases: &[] }));
        registry.register(Arc::new(EchoHandler { name: "alpha", aliases: &[] }));

        let names: Vec<String> = registry.help_docs().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
