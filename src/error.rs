//! Unified error types for slackpack.
//!
//! This module provides a single [`SlackpackError`] enum that covers every
//! failure the pipeline can report. Variants fall into two groups:
//!
//! - **Fatal** — [`Discovery`](SlackpackError::Discovery) and
//!   [`Emit`](SlackpackError::Emit) abort the run.
//! - **Local** — [`Read`](SlackpackError::Read),
//!   [`Decode`](SlackpackError::Decode) and
//!   [`Timestamp`](SlackpackError::Timestamp) skip one document or one
//!   message and are collected as diagnostics while processing continues.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A specialized [`Result`] type for slackpack operations.
///
/// # Example
///
/// ```rust
/// use slackpack::error::Result;
/// use slackpack::CsvRecord;
///
/// fn my_function() -> Result<Vec<CsvRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, SlackpackError>;

/// The error type for all slackpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SlackpackError {
    /// The input directory could not be enumerated.
    ///
    /// This typically happens when the directory does not exist or
    /// permission is denied.
    #[error("Cannot list input directory {}: {source}", path.display())]
    Discovery {
        /// The directory that was being listed
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: io::Error,
    },

    /// A discovered document could not be read.
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        /// The document path
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: io::Error,
    },

    /// A document is not a JSON array of message objects.
    #[error("Failed to decode Slack JSON{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Decode {
        /// The document path, if the input came from a file
        path: Option<PathBuf>,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A message carried a `ts` value that is not `<seconds>.<fraction>`.
    #[error("Invalid timestamp '{ts}': {reason}")]
    Timestamp {
        /// The raw `ts` value
        ts: String,
        /// What was wrong with it
        reason: &'static str,
    },

    /// The output file could not be created or written.
    ///
    /// Any partially written file has already been removed when this
    /// error is returned.
    #[error("Cannot write output {}: {source}", path.display())]
    Emit {
        /// The output path
        path: PathBuf,
        /// The underlying write error
        #[source]
        source: EmitErrorKind,
    },
}

/// Kinds of failures while emitting the CSV file.
#[derive(Debug, Error)]
pub enum EmitErrorKind {
    /// Filesystem error (create, write, flush)
    #[error("{0}")]
    Io(#[from] io::Error),
    /// CSV serialization error
    #[error("{0}")]
    Csv(#[from] csv::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl SlackpackError {
    /// Creates a discovery error for `path`.
    pub fn discovery(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SlackpackError::Discovery {
            path: path.into(),
            source,
        }
    }

    /// Creates a read error for `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SlackpackError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a decode error, optionally tied to a file.
    pub fn decode(source: serde_json::Error, path: Option<&Path>) -> Self {
        SlackpackError::Decode {
            path: path.map(Path::to_path_buf),
            source,
        }
    }

    /// Creates a timestamp error.
    pub fn timestamp(ts: impl Into<String>, reason: &'static str) -> Self {
        SlackpackError::Timestamp {
            ts: ts.into(),
            reason,
        }
    }

    /// Creates an emit error for `path`.
    pub fn emit(path: impl Into<PathBuf>, source: impl Into<EmitErrorKind>) -> Self {
        SlackpackError::Emit {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Returns `true` if this error aborts the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SlackpackError::Discovery { .. } | SlackpackError::Emit { .. }
        )
    }

    /// Returns `true` if this is a discovery error.
    pub fn is_discovery(&self) -> bool {
        matches!(self, SlackpackError::Discovery { .. })
    }

    /// Returns `true` if this is a read error.
    pub fn is_read(&self) -> bool {
        matches!(self, SlackpackError::Read { .. })
    }

    /// Returns `true` if this is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, SlackpackError::Decode { .. })
    }

    /// Returns `true` if this is a timestamp error.
    pub fn is_timestamp(&self) -> bool {
        matches!(self, SlackpackError::Timestamp { .. })
    }

    /// Returns `true` if this is an emit error.
    pub fn is_emit(&self) -> bool {
        matches!(self, SlackpackError::Emit { .. })
    }

    /// Path of the document or directory involved, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SlackpackError::Discovery { path, .. }
            | SlackpackError::Read { path, .. }
            | SlackpackError::Emit { path, .. } => Some(path.as_path()),
            SlackpackError::Decode { path, .. } => path.as_deref(),
            SlackpackError::Timestamp { .. } => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
