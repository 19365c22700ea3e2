//! # Slackpack
//!
//! Flattens a Slack channel export into one CSV table for spreadsheets and
//! data-frame tools.
//!
//! ## Overview
//!
//! A Slack export stores each channel as a directory of daily JSON
//! documents. Slackpack runs a four-stage pipeline over such a directory:
//!
//! 1. **Discovery** — list `*.json` documents, sorted by name
//! 2. **Decoding** — read each document as an array of messages
//! 3. **Normalization** — turn each message into a flat [`CsvRecord`]
//! 4. **Emission** — write every record to a single CSV file
//!
//! Unreadable documents and messages with a malformed `ts` are skipped and
//! reported; they never abort the run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slackpack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = PipelineConfig::new()
//!         .with_input_dir("exports/general")
//!         .with_output_path("general.csv");
//!
//!     let report = slackpack::pipeline::run(&config)?;
//!     println!("{} rows", report.stats.records_emitted);
//!     Ok(())
//! }
//! ```
//!
//! ## Working in Memory
//!
//! ```rust
//! use slackpack::prelude::*;
//!
//! let messages = SlackParser::new()
//!     .parse_str(r#"[{"ts":"1700000000.000000000","type":"message","user":"U1","text":"hello"}]"#)?;
//! let normalized = normalize_all(messages, TimestampOptions::default());
//!
//! let csv = to_csv(&normalized.records)?;
//! assert!(csv.contains("2023-11-14T22:13:20Z,U1,,,message,hello,,"));
//! # Ok::<(), slackpack::SlackpackError>(())
//! ```
//!
//! ## Modules
//!
//! - [`discovery`] — [`discover_documents`](discovery::discover_documents)
//! - [`parsing`] — raw Slack schema and per-message normalization
//! - [`parsers`] — [`SlackParser`](parsers::SlackParser)
//! - [`core`] — batch normalization, statistics, CSV output
//! - [`pipeline`] — the end-to-end run
//! - [`config`] — [`PipelineConfig`](config::PipelineConfig), [`TimestampMode`](config::TimestampMode)
//! - [`error`] — [`SlackpackError`], [`Result`]
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod discovery;
pub mod error;
pub mod parsers;
pub mod parsing;
pub mod pipeline;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{Result, SlackpackError};
pub use record::CsvRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use slackpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::CsvRecord;

    pub use crate::error::{Result, SlackpackError};

    pub use crate::config::{PipelineConfig, TimestampMode, TimestampOptions};

    pub use crate::discovery::discover_documents;

    pub use crate::parsers::SlackParser;
    pub use crate::parsing::SlackMessage;

    pub use crate::core::output::{to_csv, write_csv};
    pub use crate::core::processor::{Normalized, ProcessingStats, normalize_all};

    pub use crate::pipeline::{PipelineReport, run};
}
