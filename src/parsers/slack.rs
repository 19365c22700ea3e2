//! Slack export document parser.
//!
//! Each document in a channel export is a JSON array of message objects.
//! The parser reads one document fully, decodes it, and releases the file
//! before returning.

use std::fs;
use std::path::Path;

use crate::error::{Result, SlackpackError};
use crate::parsing::slack::SlackMessage;

/// Parser for Slack channel export documents.
///
/// # Example
///
/// ```rust
/// use slackpack::parsers::SlackParser;
///
/// let parser = SlackParser::new();
/// let messages = parser.parse_str(r#"[{"ts":"1700000000.000100","user":"U1","text":"hi"}]"#)?;
/// assert_eq!(messages.len(), 1);
/// # Ok::<(), slackpack::SlackpackError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SlackParser;

impl SlackParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Reads and decodes the document at `path`.
    ///
    /// Returns [`SlackpackError::Read`] if the file cannot be read and
    /// [`SlackpackError::Decode`] if it is not an array of messages.
    pub fn parse(&self, path: &Path) -> Result<Vec<SlackMessage>> {
        let bytes = fs::read(path).map_err(|e| SlackpackError::read(path, e))?;
        serde_json::from_slice(&bytes).map_err(|e| SlackpackError::decode(e, Some(path)))
    }

    /// Decodes a document held in memory.
    pub fn parse_str(&self, content: &str) -> Result<Vec<SlackMessage>> {
        self.parse_slice(content.as_bytes())
    }

    /// Decodes a document from raw bytes.
    pub fn parse_slice(&self, bytes: &[u8]) -> Result<Vec<SlackMessage>> {
        serde_json::from_slice(bytes).map_err(|e| SlackpackError::decode(e, None))
    }
}
