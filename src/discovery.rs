//! Input discovery.
//!
//! Lists the `*.json` documents directly inside the export directory.
//! Subdirectories are not descended into. The result is sorted by file
//! name so repeated runs over the same directory see the same order.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, SlackpackError};

/// File name suffix matched by discovery (as a `*.json` glob would).
pub const DOCUMENT_SUFFIX: &str = ".json";

/// Returns the `*.json` documents in `dir`, sorted by file name.
///
/// An empty directory yields an empty list. A missing directory, or a path
/// that is not a directory, is a [`SlackpackError::Discovery`].
///
/// Symlinks are followed. A dangling link whose name matches is still
/// returned, so the failure surfaces later as a per-document read error.
///
/// # Example
///
/// ```rust,no_run
/// use slackpack::discovery::discover_documents;
///
/// for path in discover_documents("SlackMessages".as_ref())? {
///     println!("{}", path.display());
/// }
/// # Ok::<(), slackpack::SlackpackError>(())
/// ```
pub fn discover_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(dir).map_err(|e| SlackpackError::discovery(dir, e))?;
    if !metadata.is_dir() {
        return Err(SlackpackError::discovery(
            dir,
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut documents = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_document_name(entry.file_name()) {
                    documents.push(entry.into_path());
                }
            }
            Err(err) if err.depth() == 0 => {
                return Err(SlackpackError::discovery(dir, io::Error::from(err)));
            }
            Err(err) => match err.path() {
                Some(path) if path.file_name().is_some_and(is_document_name) => {
                    documents.push(path.to_path_buf());
                }
                _ => debug!(error = %err, "skipping unreadable directory entry"),
            },
        }
    }

    // walkdir sorts within a directory, but dangling links are pushed from
    // the error arm; keep the whole list in one order.
    documents.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!(dir = %dir.display(), count = documents.len(), "discovered documents");
    Ok(documents)
}

/// Returns `true` if `name` matches `*.json` (case-sensitive).
pub fn is_document_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(DOCUMENT_SUFFIX.as_bytes())
}
