//! Open a journal entry in the configured editor.

use crate::config::Config;
use crate::editor::Editor;
use crate::errors::AppResult;
use crate::frontmatter::{self, Header};
use crate::journal_core::{entry_path_for_date, entry_path_for_subject, ContextDate};
use crate::ops::ensure_entries_dir;
use std::fs;
use tracing::{debug, info};

/// Opens the selected entry in the editor, creating it first if needed.
///
/// The entry is addressed by `subject` when one is given, and by the
/// operative date otherwise. A newly created entry is seeded with a
/// canonical header carrying the operative timestamp and an empty body.
///
/// # Errors
///
/// Returns `AppError::Io` for filesystem failures and `AppError::Editor`
/// when the editor cannot be launched or exits unsuccessfully.
pub fn open_entry(
    config: &Config,
    editor: &dyn Editor,
    context: ContextDate,
    subject: Option<&str>,
) -> AppResult<()> {
    let path = match subject {
        Some(subject) => entry_path_for_subject(&config.journal_root, subject),
        None => entry_path_for_date(&config.journal_root, context.date),
    };

    ensure_entries_dir(&config.journal_root)?;

    if !path.exists() {
        debug!("creating entry {}", path.display());
        let header = Header {
            tags: Vec::new(),
            date: Some(context.datetime),
        };
        fs::write(&path, frontmatter::encode(&header, ""))?;
    }

    info!("opening {}", path.display());
    editor.open_files(&[path])
}
