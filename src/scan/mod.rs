//! Concurrent entry scanning.
//!
//! This module is the fan-out/fan-in heart of the index engine. `read_entry`
//! loads and decodes a single entry; `collect_entries` spawns one reader task
//! per path, awaits every task through a structured join, and applies the
//! all-or-nothing aggregation contract: one unreadable or malformed entry
//! fails the whole batch.
//!
//! Task completion order is non-deterministic. Consumers must re-sort before
//! presenting anything to the user; see `TagIndex`.

use crate::errors::{AppError, AppResult};
use crate::frontmatter::{self, Header};
use crate::journal_core::entries_dir;
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;
use walkdir::WalkDir;

/// One decoded journal entry, labeled with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The decoded header.
    pub header: Header,
    /// The body, byte-for-byte as found on disk.
    pub body: String,
    /// Base name of the entry file, e.g. `2018-08-01.md`.
    pub filename: String,
    /// Full path the entry was read from.
    pub filepath: PathBuf,
}

/// Reads and decodes the entry at `path`.
///
/// Any I/O failure or decode failure is returned as an error value carrying
/// the offending path; the function never panics across a task boundary.
///
/// # Errors
///
/// Returns `AppError::Io` when the file cannot be read and `AppError::Parse`
/// when its contents fail to decode.
pub async fn read_entry(path: PathBuf) -> AppResult<Entry> {
    let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to read entry {}: {}", path.display(), e),
        ))
    })?;

    let (header, body) = frontmatter::decode(&raw).map_err(|e| AppError::parse(&path, e))?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Entry {
        header,
        body: body.to_string(),
        filename,
        filepath: path,
    })
}

/// Reads every listed entry concurrently, one task per path.
///
/// All tasks are awaited before this function returns; results are then
/// scanned in completion order, and if any one of them is an error the whole
/// operation fails with that first-encountered error wrapped in
/// `AppError::Batch`, discarding the partial successes. There is no
/// partial-index fallback.
///
/// # Errors
///
/// Returns `AppError::Batch` wrapping the first failed read, or
/// `AppError::Journal` if a reader task itself dies.
pub async fn collect_entries(paths: Vec<PathBuf>) -> AppResult<Vec<Entry>> {
    let mut tasks = JoinSet::new();
    for path in paths {
        tasks.spawn(read_entry(path));
    }

    // Fan back in: every worker reports exactly once, in completion order.
    let mut results = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(result) => results.push(result),
            Err(e) => {
                return Err(AppError::Journal(format!("entry reader task failed: {}", e)));
            }
        }
    }

    let mut entries = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(entry) => entries.push(entry),
            Err(e) => return Err(AppError::Batch(Box::new(e))),
        }
    }
    Ok(entries)
}

/// Lists the entry files directly under `<journalRoot>/entries`.
///
/// The listing is shallow: sub-directories are not descended into. An empty
/// directory yields an empty list; an unreadable one is an I/O error.
pub fn entry_files(journal_root: &Path) -> AppResult<Vec<PathBuf>> {
    let directory = entries_dir(journal_root);
    let mut files = Vec::new();
    for dent in WalkDir::new(&directory).min_depth(1).max_depth(1) {
        let dent = dent.map_err(|e| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("failed to list entries in {}: {}", directory.display(), e),
            ))
        })?;
        if dent.file_type().is_file() {
            files.push(dent.into_path());
        }
    }
    Ok(files)
}
