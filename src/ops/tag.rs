//! Append tags to journal entries.

use crate::config::Config;
use crate::errors::AppResult;
use crate::journal_core::{parse_entry_date, ContextDate, EntryTarget};
use crate::ops::ensure_entries_dir;
use crate::tagging::{self, EntryWriter};
use std::path::PathBuf;
use tracing::info;

/// Applies `tags` to the entries selected by files, subjects, and dates.
///
/// Every date string is parsed up front, so an invalid calendar date aborts
/// the whole batch before any file is touched. With no selection at all, the
/// operative date's entry is tagged, created first when missing.
///
/// # Errors
///
/// Returns `AppError::DateParse` for an invalid date argument,
/// `AppError::Batch` when any selected entry fails to read, and the first
/// write error otherwise.
pub async fn tag_entries(
    config: &Config,
    writer: &dyn EntryWriter,
    files: Vec<PathBuf>,
    subjects: Vec<String>,
    dates: Vec<String>,
    tags: Vec<String>,
    context: ContextDate,
) -> AppResult<()> {
    // Resolve the addressing modes before any I/O; a bad date is fatal here.
    let mut targets: Vec<EntryTarget> = Vec::new();
    targets.extend(files.into_iter().map(EntryTarget::File));
    targets.extend(subjects.into_iter().map(EntryTarget::Subject));
    for date in &dates {
        targets.push(EntryTarget::Date(parse_entry_date(date)?));
    }

    ensure_entries_dir(&config.journal_root)?;

    info!("tagging {} target(s) with {:?}", targets.len().max(1), tags);
    tagging::apply_tags(&config.journal_root, &targets, &tags, context, writer).await
}
