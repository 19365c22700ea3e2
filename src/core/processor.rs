//! Message normalization and run statistics.

use crate::CsvRecord;
use crate::config::TimestampOptions;
use crate::error::SlackpackError;
use crate::parsing::slack::{SlackMessage, normalize_message};

/// Result of normalizing a batch of messages.
#[derive(Debug, Default)]
pub struct Normalized {
    /// One record per message with a valid `ts`, in input order.
    pub records: Vec<CsvRecord>,
    /// One [`SlackpackError::Timestamp`] per skipped message, in input order.
    pub skipped: Vec<SlackpackError>,
}

/// Converts messages to records, skipping those with a bad `ts`.
///
/// # Example
/// Input:  `[{ts: "1.0"}, {ts: "oops"}, {ts: "2.0"}]`
/// Output: two records (for `1.0` and `2.0`) and one skipped error
pub fn normalize_all(messages: Vec<SlackMessage>, options: TimestampOptions) -> Normalized {
    let mut out = Normalized {
        records: Vec::with_capacity(messages.len()),
        skipped: Vec::new(),
    };

    for msg in messages {
        match normalize_message(msg, options) {
            Ok(record) => out.records.push(record),
            Err(err) => out.skipped.push(err),
        }
    }

    out
}

/// Statistics about a pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// `*.json` documents found in the input directory
    pub documents_discovered: usize,
    /// Documents read and decoded successfully
    pub documents_decoded: usize,
    /// Documents skipped for read or decode errors
    pub documents_skipped: usize,
    /// Messages decoded across all documents
    pub messages_decoded: usize,
    /// Rows written to the CSV
    pub records_emitted: usize,
    /// Messages skipped for a missing or malformed `ts`
    pub messages_skipped: usize,
}

impl ProcessingStats {
    /// Percentage of decoded messages that became rows.
    pub fn success_rate(&self) -> f64 {
        if self.messages_decoded == 0 {
            return 100.0;
        }
        self.records_emitted as f64 / self.messages_decoded as f64 * 100.0
    }

    /// Documents were found but no row came out of them.
    ///
    /// A run whose decoded documents were all empty arrays had nothing to
    /// emit and is not a failure.
    pub fn is_total_failure(&self) -> bool {
        self.documents_discovered > 0
            && self.records_emitted == 0
            && (self.documents_decoded == 0 || self.messages_decoded > 0)
    }
}
