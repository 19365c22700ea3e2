//! Slack export schema and per-message normalization.
//!
//! A Slack channel export holds one JSON document per day, each a top-level
//! array of message objects. Nearly every field is optional, and unknown
//! fields are ignored.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

use crate::CsvRecord;
use crate::config::{TimestampMode, TimestampOptions};
use crate::error::{Result, SlackpackError};

const NANOS_PER_SEC: i64 = 1_000_000_000;
const NANO_DIGITS: usize = 9;

/// Raw Slack message structure for deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackMessage {
    /// `"<seconds>.<fraction>"`
    pub ts: Option<String>,
    pub user: Option<String>,
    #[serde(rename = "type")]
    pub message_type: Option<String>,
    pub client_msg_id: Option<String>,
    pub text: Option<String>,
    pub user_profile: Option<SlackUserProfile>,
    pub attachments: Option<Vec<SlackAttachment>>,
    pub files: Option<Vec<SlackFile>>,
    pub upload: Option<bool>,
}

impl SlackMessage {
    /// `original_url` of each attachment, in order. Missing URLs become `""`.
    pub fn attachment_urls(&self) -> Vec<String> {
        self.attachments
            .iter()
            .flatten()
            .map(|a| a.original_url.clone().unwrap_or_default())
            .collect()
    }

    /// `url_private_download` of each file, in order. Missing URLs become `""`.
    pub fn file_urls(&self) -> Vec<String> {
        self.files
            .iter()
            .flatten()
            .map(|f| f.url_private_download.clone().unwrap_or_default())
            .collect()
    }
}

/// Snapshot of the author embedded in the message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackUserProfile {
    pub name: Option<String>,
    pub real_name: Option<String>,
    pub display_name: Option<String>,
    pub first_name: Option<String>,
    pub image_72: Option<String>,
}

/// Link unfurl attached by Slack when a URL was pasted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackAttachment {
    pub id: Option<i64>,
    pub text: Option<String>,
    pub fallback: Option<String>,
    pub from_url: Option<String>,
    pub service_name: Option<String>,
    pub original_url: Option<String>,
}

/// Metadata of a file uploaded with the message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackFile {
    pub id: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub mimetype: Option<String>,
    pub pretty_type: Option<String>,
    pub is_external: Option<bool>,
    pub is_public: Option<bool>,
    pub url_private_download: Option<String>,
    #[serde(rename = "original_w")]
    pub original_width: Option<i64>,
    #[serde(rename = "original_h")]
    pub original_height: Option<i64>,
}

/// Parses a Slack `ts` value into a UTC instant.
///
/// The value is split on the first `.`; both halves must be non-empty runs
/// of ASCII digits. How the fraction is read depends on `mode`:
///
/// - [`TimestampMode::Literal`]: nanoseconds as written, carrying whole
///   seconds when the value reaches 10^9.
/// - [`TimestampMode::Decimal`]: a decimal fraction of a second, truncated
///   to nanosecond precision.
///
/// # Example
///
/// ```
/// use slackpack::config::TimestampMode;
/// use slackpack::parsing::slack::parse_slack_timestamp;
///
/// let dt = parse_slack_timestamp("1700000000.000100", TimestampMode::Literal)?;
/// assert_eq!(dt.timestamp_subsec_nanos(), 100);
///
/// let dt = parse_slack_timestamp("1700000000.000100", TimestampMode::Decimal)?;
/// assert_eq!(dt.timestamp_subsec_nanos(), 100_000);
/// # Ok::<(), slackpack::SlackpackError>(())
/// ```
pub fn parse_slack_timestamp(ts: &str, mode: TimestampMode) -> Result<DateTime<Utc>> {
    let (secs, frac) = ts
        .split_once('.')
        .ok_or_else(|| SlackpackError::timestamp(ts, "missing '.' separator"))?;

    let secs = parse_digits(secs)
        .ok_or_else(|| SlackpackError::timestamp(ts, "seconds are not a non-negative integer"))?;

    let nanos = match mode {
        TimestampMode::Literal => parse_digits(frac),
        TimestampMode::Decimal => parse_decimal_fraction(frac),
    }
    .ok_or_else(|| SlackpackError::timestamp(ts, "fraction is not a non-negative integer"))?;

    let secs = secs
        .checked_add(nanos / NANOS_PER_SEC)
        .ok_or_else(|| SlackpackError::timestamp(ts, "out of range"))?;
    // nanos is non-negative, so the remainder fits in u32
    let subsec = u32::try_from(nanos % NANOS_PER_SEC)
        .map_err(|_| SlackpackError::timestamp(ts, "out of range"))?;

    DateTime::from_timestamp(secs, subsec).ok_or_else(|| SlackpackError::timestamp(ts, "out of range"))
}

/// Formats an instant as RFC 3339 in UTC with a `Z` suffix.
///
/// Whole seconds by default; with `fractional_seconds` the shortest of 3, 6
/// or 9 sub-second digits that represents the instant is appended.
pub fn format_timestamp(dt: DateTime<Utc>, fractional_seconds: bool) -> String {
    let precision = if fractional_seconds {
        SecondsFormat::AutoSi
    } else {
        SecondsFormat::Secs
    };
    dt.to_rfc3339_opts(precision, true)
}

/// Converts one Slack message into a [`CsvRecord`].
///
/// The only failure is a missing or malformed `ts`. Every other absent
/// field becomes an empty string or an empty list.
pub fn normalize_message(msg: SlackMessage, options: TimestampOptions) -> Result<CsvRecord> {
    let ts = msg
        .ts
        .as_deref()
        .ok_or_else(|| SlackpackError::timestamp("", "missing ts"))?;
    let instant = parse_slack_timestamp(ts, options.mode)?;

    let attachments = msg.attachment_urls();
    let files = msg.file_urls();

    let (user_name, real_name) = msg
        .user_profile
        .map(|p| (p.name.unwrap_or_default(), p.real_name.unwrap_or_default()))
        .unwrap_or_default();

    Ok(CsvRecord {
        timestamp: format_timestamp(instant, options.fractional_seconds),
        user_id: msg.user.unwrap_or_default(),
        user_name,
        real_name,
        message_type: msg.message_type.unwrap_or_default(),
        text: msg.text.unwrap_or_default(),
        attachments,
        files,
    })
}

fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_decimal_fraction(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = &s[..s.len().min(NANO_DIGITS)];
    let value: i64 = digits.parse().ok()?;
    let scale = u32::try_from(NANO_DIGITS - digits.len()).ok()?;
    Some(value * 10_i64.pow(scale))
}
