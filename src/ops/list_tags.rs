//! List every tag in the journal.

use crate::config::Config;
use crate::errors::AppResult;
use crate::index;
use std::io::Write;

/// Builds the tag index and prints each tag on its own line, sorted.
///
/// # Errors
///
/// Propagates index-build errors and `AppError::Io` from the writer.
pub async fn list_tags(config: &Config, out: &mut dyn Write) -> AppResult<()> {
    let index = index::build_tag_index(&config.journal_root).await?;
    for tag in index.sorted_tags() {
        writeln!(out, "{}", tag)?;
    }
    Ok(())
}
