//! Journal workflows, one module per command.
//!
//! Each operation takes its collaborators explicitly (configuration, the
//! operative date, and any capability traits it needs) and returns a typed
//! result; user-facing presentation and exit codes are `main`'s concern.

pub mod find;
pub mod image;
pub mod index;
pub mod list_tags;
pub mod memorize;
pub mod open;
pub mod sync;
pub mod tag;

use crate::errors::AppResult;
use crate::journal_core::entries_dir;
use std::fs;
use std::path::Path;

/// Ensures the journal's entries directory exists, creating it (and the
/// journal root) if necessary.
///
/// # Errors
///
/// Returns `AppError::Io` if directory creation fails.
pub fn ensure_entries_dir(journal_root: &Path) -> AppResult<()> {
    let directory = entries_dir(journal_root);
    if !directory.exists() {
        fs::create_dir_all(&directory)?;
    }
    Ok(())
}
