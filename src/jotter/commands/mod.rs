use crate::config::JotConfig;
use crate::model::Note;
use crate::suggest::Suggestion;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod get;
pub mod list;
pub mod rename;
pub mod suggest;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
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
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Notes shown to the user (list, view). Copies, never live store entries.
    pub notes: Vec<Note>,
    pub suggestion: Option<Suggestion>,
    pub exported: Vec<PathBuf>,
    pub config: Option<JotConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }

    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    pub fn with_exported(mut self, path: PathBuf) -> Self {
        self.exported.push(path);
        self
    }

    pub fn with_config(mut self, config: JotConfig) -> Self {
        self.config = Some(config);
        self
    }
}
