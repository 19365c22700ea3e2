//! The flat output row.
//!
//! Every successfully normalized Slack message becomes exactly one
//! [`CsvRecord`]. Nested attachments and uploaded files are reduced to the
//! URLs they point at.
//!
//! # Example
//!
//! ```
//! use slackpack::CsvRecord;
//!
//! let record = CsvRecord::new("2023-11-14T22:13:20Z", "U1", "message")
//!     .with_text("hello")
//!     .with_attachments(vec!["https://example.com".to_string()]);
//!
//! assert_eq!(record.user_id, "U1");
//! assert_eq!(record.attachments.len(), 1);
//! assert!(record.files.is_empty());
//! ```

use serde::Serialize;

/// One row of the extract.
///
/// | Field | Column | Source |
/// |-------|--------|--------|
/// | `timestamp` | `TimeStamp` | `ts`, as RFC 3339 UTC |
/// | `user_id` | `UserID` | `user` |
/// | `user_name` | `UserName` | `user_profile.name` |
/// | `real_name` | `RealName` | `user_profile.real_name` |
/// | `message_type` | `MessageType` | `type` |
/// | `text` | `Text` | `text` |
/// | `attachments` | `Attachments` | `attachments[].original_url` |
/// | `files` | `Files` | `files[].url_private_download` |
///
/// `attachments` and `files` are always present; a message without
/// attachments has an empty list, never a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CsvRecord {
    #[serde(rename = "TimeStamp")]
    pub timestamp: String,

    #[serde(rename = "UserID")]
    pub user_id: String,

    #[serde(rename = "UserName")]
    pub user_name: String,

    #[serde(rename = "RealName")]
    pub real_name: String,

    #[serde(rename = "MessageType")]
    pub message_type: String,

    #[serde(rename = "Text")]
    pub text: String,

    /// Unfurled link URLs in input order. Empty strings are kept.
    #[serde(rename = "Attachments")]
    pub attachments: Vec<String>,

    /// Download URLs of uploaded files in input order. Empty strings are kept.
    #[serde(rename = "Files")]
    pub files: Vec<String>,
}

impl CsvRecord {
    /// Creates a record with the three always-populated columns set and
    /// everything else empty.
    pub fn new(
        timestamp: impl Into<String>,
        user_id: impl Into<String>,
        message_type: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            user_id: user_id.into(),
            message_type: message_type.into(),
            ..Self::default()
        }
    }

    /// Sets `UserName` and `RealName`.
    #[must_use]
    pub fn with_names(mut self, user_name: impl Into<String>, real_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self.real_name = real_name.into();
        self
    }

    /// Sets the message text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the attachment URL list.
    #[must_use]
    pub fn with_attachments(mut self, attachments: Vec<String>) -> Self {
        self.attachments = attachments;
        self
    }

    /// Sets the file URL list.
    #[must_use]
    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }
}
