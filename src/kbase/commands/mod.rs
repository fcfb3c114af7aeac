use chrono::{DateTime, Utc};

use crate::search::SearchResult;

pub mod export;
pub mod list;
pub mod log;
pub mod save;
pub mod search;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of the `sections` listing.
#[derive(Debug, Clone)]
pub struct SectionSummary {
    pub id: String,
    pub name: String,
    pub entry_count: usize,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Structured output of a command: a rendered fragment and/or typed data,
/// plus status messages for the terminal. The CLI decides what to print.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub fragment: Option<String>,
    pub results: Vec<SearchResult>,
    pub sections: Vec<SectionSummary>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_fragment(mut self, fragment: String) -> Self {
        self.fragment = Some(fragment);
        self
    }

    pub fn with_results(mut self, results: Vec<SearchResult>) -> Self {
        self.results = results;
        self
    }

    pub fn with_sections(mut self, sections: Vec<SectionSummary>) -> Self {
        self.sections = sections;
        self
    }
}
