//! Slack export schema and normalization.
//!
//! The raw serde types and the message-to-row conversion live here, kept
//! apart from [`crate::parsers`], which deals with reading documents.

pub mod slack;

// Re-export commonly used items
pub use slack::{
    SlackAttachment, SlackFile, SlackMessage, SlackUserProfile, format_timestamp,
    normalize_message, parse_slack_timestamp,
};
