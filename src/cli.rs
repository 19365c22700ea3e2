//! Command-line interface definition using clap.
//!
//! With no arguments the tool reads `./SlackMessages/*.json` and writes
//! `./slack_records.csv`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH, PipelineConfig, TimestampMode};

/// Flatten a Slack channel export into a single CSV file.
#[derive(Parser, Debug, Clone)]
#[command(name = "slackpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    slackpack
    slackpack -i exports/general -o general.csv
    slackpack --decimal-fraction --subsec
    RUST_LOG=debug slackpack")]
pub struct Args {
    /// Directory containing the exported *.json documents
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// Path to output CSV file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Read the digits after '.' in `ts` as a decimal fraction of a second
    /// instead of a literal nanosecond count
    #[arg(long)]
    pub decimal_fraction: bool,

    /// Include sub-second digits in TimeStamp
    #[arg(long)]
    pub subsec: bool,

    /// Suppress the progress summary on stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Args {
    /// Builds the pipeline configuration these arguments describe.
    pub fn to_config(&self) -> PipelineConfig {
        let mode = if self.decimal_fraction {
            TimestampMode::Decimal
        } else {
            TimestampMode::Literal
        };

        PipelineConfig::new()
            .with_input_dir(&self.input)
            .with_output_path(&self.output)
            .with_timestamp_mode(mode)
            .with_fractional_seconds(self.subsec)
    }

    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
