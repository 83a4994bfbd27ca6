//! Help command - lists commands or explains one.

use crate::commands::{CommandHandler, HelpDoc};
use crate::error::AppResult;
use async_trait::async_trait;
use chat_client::{ChatCommand, ChatResponse};

pub struct HelpHandler {
    docs: Vec<HelpDoc>,
    trigger: String,
}

impl HelpHandler {
    /// Create a help command covering `docs` and itself.
    pub fn new(mut docs: Vec<HelpDoc>, trigger: impl Into<String>) -> Self {
        docs.push(help_doc());
        docs.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            docs,
            trigger: trigger.into(),
        }
    }

    /// One `/{name}: {summary}` line per command.
    fn listing(&self) -> String {
        self.docs
            .iter()
            .map(|doc| format!("{}{}: {}", self.trigger, doc.name, doc.summary))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn help_doc() -> HelpDoc {
    HelpDoc::new("help", "Displays this help message.")
        .detail("Pass a command name to see more about that command.")
}

#[async_trait]
impl CommandHandler for HelpHandler {
    fn name(&self) -> &str {
        "help"
    }

    fn help(&self) -> HelpDoc {
        help_doc()
    }

    async fn execute(&self, command: &ChatCommand) -> AppResult<Option<ChatResponse>> {
        let wanted = command.content.trim();
        if wanted.is_empty() {
            return Ok(Some(ChatResponse::new(self.listing())));
        }

        let wanted = wanted.strip_prefix(self.trigger.as_str()).unwrap_or(wanted);
        let text = match self.docs.iter().find(|doc| doc.answers_to(wanted)) {
            Some(doc) => doc.detail_text(),
            None => format!("No command named \"{}\".", wanted.to_lowercase()),
        };

        Ok(Some(ChatResponse::reply(command, text)))
    }
}
