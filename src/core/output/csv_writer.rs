//! CSV output writer.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::warn;

use crate::CsvRecord;
use crate::error::{EmitErrorKind, Result, SlackpackError};

/// Column names, in output order.
pub const HEADER: [&str; 8] = [
    "TimeStamp",
    "UserID",
    "UserName",
    "RealName",
    "MessageType",
    "Text",
    "Attachments",
    "Files",
];

/// Separator between URLs inside the `Attachments` and `Files` cells.
pub const LIST_SEPARATOR: &str = ",";

/// Writes records to a CSV file.
///
/// # Format
/// - Delimiter: `,`, quoting only where needed
/// - Columns: see [`HEADER`]
/// - List cells: URLs joined with `,`; an empty list is an empty cell
/// - Rows end with `\n`; encoding UTF-8
///
/// If anything fails after the file was created, the file is removed
/// before the error is returned, so no half-written extract is left behind.
pub fn write_csv(records: &[CsvRecord], output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| SlackpackError::emit(output_path, e))?;

    if let Err(err) = write_records(records, file) {
        if let Err(remove_err) = fs::remove_file(output_path) {
            warn!(
                path = %output_path.display(),
                error = %remove_err,
                "failed to remove partial output"
            );
        }
        return Err(SlackpackError::emit(output_path, err));
    }

    Ok(())
}

/// Renders records as a CSV string.
///
/// Same bytes as [`write_csv`], returned in memory.
pub fn to_csv(records: &[CsvRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer).map_err(|e| SlackpackError::emit("<memory>", e))?;
    String::from_utf8(buffer).map_err(|e| {
        SlackpackError::emit(
            "<memory>",
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}

/// Writes the header and every record to `writer`, then flushes.
///
/// `writer` is consumed, so a file handle is closed when this returns.
pub fn write_records<W: Write>(records: &[CsvRecord], writer: W) -> std::result::Result<(), EmitErrorKind> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(HEADER)?;

    for record in records {
        writer.write_record(build_record(record))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build the CSV cells for a single record.
fn build_record(record: &CsvRecord) -> [String; 8] {
    [
        record.timestamp.clone(),
        record.user_id.clone(),
        record.user_name.clone(),
        record.real_name.clone(),
        record.message_type.clone(),
        record.text.clone(),
        record.attachments.join(LIST_SEPARATOR),
        record.files.join(LIST_SEPARATOR),
    ]
}
