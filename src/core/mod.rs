//! Core processing logic for slackpack.
//!
//! This module contains:
//! - [`processor`] - Message normalization and run statistics
//! - [`output`] - The CSV writer

pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use output::{to_csv, write_csv};
pub use processor::{Normalized, ProcessingStats, normalize_all};

pub use crate::CsvRecord;
