//! Tests for the CSV writer

use std::fs;

use slackpack::CsvRecord;
use slackpack::core::output::{HEADER, LIST_SEPARATOR, to_csv, write_csv};
use tempfile::tempdir;

fn sample_records() -> Vec<CsvRecord> {
    vec![
        CsvRecord::new("2024-01-15T10:30:00Z", "U01", "message")
            .with_names("alice", "Alice Anderson")
            .with_text("Hello, team!"),
        CsvRecord::new("2024-01-15T10:31:00Z", "U02", "message")
            .with_names("bob", "Bob")
            .with_text("See the doc")
            .with_attachments(vec![
                "https://docs.example/a".into(),
                "https://docs.example/b".into(),
            ]),
        CsvRecord::new("2024-01-15T10:32:00Z", "U01", "message")
            .with_files(vec!["https://files.slack.example/F1/download".into()]),
    ]
}

#[test]
fn test_header_is_exact() {
    let csv = to_csv(&[]).unwrap();
    assert_eq!(
        csv,
        "TimeStamp,UserID,UserName,RealName,MessageType,Text,Attachments,Files\n"
    );
}

#[test]
fn test_every_row_is_newline_terminated() {
    let csv = to_csv(&sample_records()).unwrap();
    assert!(csv.ends_with('\n'));
    assert!(!csv.contains('\r'));
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn test_lists_parse_back_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_csv(&sample_records(), &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER.to_vec());

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 3);

    let attachments: Vec<&str> = rows[1][6].split(LIST_SEPARATOR).collect();
    assert_eq!(attachments, vec!["https://docs.example/a", "https://docs.example/b"]);
    assert_eq!(&rows[2][7], "https://files.slack.example/F1/download");

    // empty lists are empty cells, never "null" or "[]"
    assert_eq!(&rows[0][6], "");
    assert_eq!(&rows[0][7], "");
}

#[test]
fn test_unicode_text() {
    let record = CsvRecord::new("2024-01-15T10:30:00Z", "U01", "message")
        .with_names("иван", "Иван Петров")
        .with_text("Привет! 🎉 こんにちは");
    let csv = to_csv(&[record]).unwrap();
    assert!(csv.contains("иван,Иван Петров,message,Привет! 🎉 こんにちは"));
}

#[test]
fn test_existing_output_is_replaced() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    fs::write(&path, "stale content that is much longer than the new file\n".repeat(100)).unwrap();

    write_csv(&[], &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), format!("{}\n", HEADER.join(",")));
}

#[test]
fn test_output_path_is_directory() {
    let dir = tempdir().unwrap();

    let err = write_csv(&sample_records(), dir.path()).unwrap_err();
    assert!(err.is_emit());
    assert!(dir.path().is_dir());
}
