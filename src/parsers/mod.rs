//! Document parsers.
//!
//! - [`SlackParser`] - reads and decodes one Slack export document

pub mod slack;

pub use slack::SlackParser;
