//! Output writers.
//!
//! - [`write_csv`] / [`to_csv`] - the tabular extract, one row per message
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> slackpack::Result<()> {
//! use slackpack::CsvRecord;
//! use slackpack::core::output::{to_csv, write_csv};
//!
//! let records = vec![
//!     CsvRecord::new("2023-11-14T22:13:20Z", "U1", "message").with_text("hello"),
//! ];
//!
//! write_csv(&records, "slack_records.csv".as_ref())?;
//!
//! // Or get the same bytes as a string
//! let csv_string = to_csv(&records)?;
//! # Ok(())
//! # }
//! ```

mod csv_writer;

pub use csv_writer::{HEADER, LIST_SEPARATOR, to_csv, write_csv, write_records};
