//! The end-to-end run: discover, decode, normalize, emit.
//!
//! Documents are processed one at a time in discovery order. A document
//! that cannot be read or decoded is skipped, and so is a message whose
//! `ts` is malformed; both are logged and kept in the report. Only a
//! failure to list the input directory or to write the output aborts the
//! run.
//!
//! # Example
//!
//! ```rust,no_run
//! use slackpack::config::PipelineConfig;
//! use slackpack::pipeline;
//!
//! let report = pipeline::run(&PipelineConfig::default())?;
//! println!("{} rows written", report.stats.records_emitted);
//! for diagnostic in &report.diagnostics {
//!     eprintln!("{diagnostic}");
//! }
//! # Ok::<(), slackpack::SlackpackError>(())
//! ```

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::CsvRecord;
use crate::config::{PipelineConfig, TimestampOptions};
use crate::core::output::write_csv;
use crate::core::processor::{ProcessingStats, normalize_all};
use crate::discovery::discover_documents;
use crate::error::{Result, SlackpackError};
use crate::parsers::SlackParser;

/// Outcome of a completed run.
#[derive(Debug)]
pub struct PipelineReport {
    /// Where the CSV was written
    pub output_path: PathBuf,
    /// Counters for the run
    pub stats: ProcessingStats,
    /// Local errors (read, decode, timestamp) in the order they occurred
    pub diagnostics: Vec<SlackpackError>,
}

impl PipelineReport {
    /// Documents were discovered but no row was emitted from them.
    pub fn is_total_failure(&self) -> bool {
        self.stats.is_total_failure()
    }
}

/// Records and bookkeeping gathered from a list of documents.
#[derive(Debug, Default)]
pub struct Collected {
    pub records: Vec<CsvRecord>,
    pub stats: ProcessingStats,
    pub diagnostics: Vec<SlackpackError>,
}

/// Runs the whole pipeline with `config`.
///
/// Returns [`SlackpackError::Discovery`] or [`SlackpackError::Emit`] on
/// fatal failures. Per-document and per-message problems are reported in
/// [`PipelineReport::diagnostics`] instead.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport> {
    let documents = discover_documents(&config.input_dir)?;
    info!(
        dir = %config.input_dir.display(),
        documents = documents.len(),
        "discovered input documents"
    );

    let Collected {
        records,
        mut stats,
        diagnostics,
    } = collect_records(&documents, config.timestamp_options());

    write_csv(&records, &config.output_path)?;
    stats.records_emitted = records.len();
    info!(
        path = %config.output_path.display(),
        rows = stats.records_emitted,
        "wrote output"
    );

    Ok(PipelineReport {
        output_path: config.output_path.clone(),
        stats,
        diagnostics,
    })
}

/// Decodes and normalizes `documents` in order.
///
/// The returned records preserve document order and, within a document,
/// message order. `stats.records_emitted` is left at zero; it is set once
/// the rows are actually written.
pub fn collect_records(documents: &[PathBuf], options: TimestampOptions) -> Collected {
    let parser = SlackParser::new();
    let mut collected = Collected::default();
    collected.stats.documents_discovered = documents.len();

    for path in documents {
        let messages = match parser.parse(path) {
            Ok(messages) => messages,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping document");
                collected.stats.documents_skipped += 1;
                collected.diagnostics.push(err);
                continue;
            }
        };

        collected.stats.documents_decoded += 1;
        collected.stats.messages_decoded += messages.len();
        debug!(path = %path.display(), messages = messages.len(), "decoded document");

        let normalized = normalize_all(messages, options);
        collected.records.extend(normalized.records);
        for err in normalized.skipped {
            warn!(path = %path.display(), error = %err, "skipping message");
            collected.stats.messages_skipped += 1;
            collected.diagnostics.push(err);
        }
    }

    collected
}
