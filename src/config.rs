//! Pipeline configuration.
//!
//! [`PipelineConfig`] is a plain struct with builder methods and no CLI
//! framework dependency, so library callers and the binary share it.
//!
//! # Example
//!
//! ```rust
//! use slackpack::config::{PipelineConfig, TimestampMode};
//!
//! let config = PipelineConfig::new()
//!     .with_input_dir("exports/general")
//!     .with_output_path("general.csv")
//!     .with_timestamp_mode(TimestampMode::Decimal);
//!
//! assert_eq!(config.output_path.to_str(), Some("general.csv"));
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default directory scanned for `*.json` documents.
pub const DEFAULT_INPUT_DIR: &str = "./SlackMessages/";

/// Default output file.
pub const DEFAULT_OUTPUT_PATH: &str = "./slack_records.csv";

/// How the digits after the `.` in a Slack `ts` are interpreted.
///
/// Slack writes six fractional digits (microseconds). The historical
/// behavior of this tool reads them as a literal nanosecond count, which
/// is kept as the default so existing extracts stay byte-identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampMode {
    /// Fraction is a nanosecond count as written. `"1.5"` is 1s + 5ns.
    /// Values of 10^9 or more carry into the seconds.
    #[default]
    Literal,

    /// Fraction is a decimal fraction of a second. `"1.5"` is 1.5s.
    /// Digits past the ninth are truncated.
    Decimal,
}

impl std::fmt::Display for TimestampMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimestampMode::Literal => write!(f, "literal nanoseconds"),
            TimestampMode::Decimal => write!(f, "decimal fraction"),
        }
    }
}

/// Configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory holding the exported `*.json` documents (default: `./SlackMessages/`)
    pub input_dir: PathBuf,

    /// CSV file to write (default: `./slack_records.csv`)
    pub output_path: PathBuf,

    /// Interpretation of the `ts` fraction (default: literal nanoseconds)
    pub timestamp_mode: TimestampMode,

    /// Emit sub-second digits in `TimeStamp` (default: false)
    pub fractional_seconds: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            timestamp_mode: TimestampMode::Literal,
            fractional_seconds: false,
        }
    }
}

impl PipelineConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input directory.
    #[must_use]
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Sets the output file path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Sets how `ts` fractions are interpreted.
    #[must_use]
    pub fn with_timestamp_mode(mut self, mode: TimestampMode) -> Self {
        self.timestamp_mode = mode;
        self
    }

    /// Enables or disables sub-second digits in the output.
    #[must_use]
    pub fn with_fractional_seconds(mut self, enabled: bool) -> Self {
        self.fractional_seconds = enabled;
        self
    }

    /// Normalization options derived from this configuration.
    pub fn timestamp_options(&self) -> TimestampOptions {
        TimestampOptions {
            mode: self.timestamp_mode,
            fractional_seconds: self.fractional_seconds,
        }
    }
}

/// The subset of [`PipelineConfig`] the normalizer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimestampOptions {
    /// How the digits after the `.` in `ts` are read
    pub mode: TimestampMode,
    /// Keep sub-second digits in the formatted timestamp
    pub fractional_seconds: bool,
}
