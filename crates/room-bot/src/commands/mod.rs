//! Bot command handlers.

mod advent;
mod groot;
mod help;
mod registry;

pub use advent::AdventHandler;
pub use groot::GrootHandler;
pub use help::HelpHandler;
pub use registry::CommandRegistry;

use crate::error::AppResult;
use async_trait::async_trait;
use chat_client::{ChatCommand, ChatResponse};

/// Help text for a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpDoc {
    /// Command name.
    pub name: String,
    /// Other names the command answers to.
    pub aliases: Vec<String>,
    /// One-line description, shown in the command listing.
    pub summary: String,
    /// Longer description, shown by `/help <name>`.
    pub detail: Option<String>,
    /// Whether `/help <name>` starts with the summary.
    pub include_summary_with_detail: bool,
}

impl HelpDoc {
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            summary: summary.into(),
            detail: None,
            include_summary_with_detail: true,
        }
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `name` is this command's name or one of its aliases.
    pub fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn include_summary_with_detail(mut self, include: bool) -> Self {
        self.include_summary_with_detail = include;
        self
    }

    /// Full help text for the command.
    pub fn detail_text(&self) -> String {
        match &self.detail {
            Some(detail) if self.include_summary_with_detail => {
                format!("{} {}", self.summary, detail)
            }
            Some(detail) => detail.clone(),
            None => self.summary.clone(),
        }
    }
}

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name (e.g., "help", "groot").
    fn name(&self) -> &str;

    /// Other names the command answers to.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Help text for the command.
    fn help(&self) -> HelpDoc;

    /// Execute the command. `None` means there is nothing to post.
    async fn execute(&self, command: &ChatCommand) -> AppResult<Option<ChatResponse>>;
}
