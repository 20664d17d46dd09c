use crate::board::Change;
use crate::config::ThreadzConfig;
use crate::error::{Result, ThreadzError};
use crate::ident::Identifier;
use crate::model::CommentNode;
use std::path::PathBuf;

pub mod config;
pub mod delete;
pub mod init;
pub mod list;
pub mod post;
pub mod reply;
pub mod star;
pub mod view;

pub use list::DisplayComment;

#[derive(Debug, Clone, PartialEq, Eq)]
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

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Comments created by the command
    pub affected_comments: Vec<CommentNode>,
    /// Flattened view for rendering
    pub listed_comments: Vec<DisplayComment>,
    /// Star state after a toggle, per id
    pub star_states: Vec<(Identifier, bool)>,
    pub config: Option<ThreadzConfig>,
    pub data_dir: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
    /// Which slot the command mutated, if any
    pub changed: Option<Change>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_comments(mut self, comments: Vec<DisplayComment>) -> Self {
        self.listed_comments = comments;
        self
    }

    pub fn with_config(mut self, config: ThreadzConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_change(mut self, change: Change) -> Self {
        self.changed = Some(change);
        self
    }
}

/// Parses user-supplied ids, failing on the first malformed one.
pub fn parse_ids<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<Identifier>> {
    if inputs.is_empty() {
        return Err(ThreadzError::Api("No comment ids given".to_string()));
    }
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ids_accepts_labels() {
        let ids = parse_ids(&["1", "2.3"]).unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[1].to_string(), "2.3");
    }

    #[test]
    fn parse_ids_rejects_garbage_and_empty_input() {
        assert!(matches!(
            parse_ids(&["1", "x"]),
            Err(ThreadzError::InvalidIdentifier(_))
        ));
        let none: [&str; 0] = [];
        assert!(parse_ids(&none).is_err());
    }
}
