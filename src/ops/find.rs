//! Find entries carrying specific tags.

use crate::config::Config;
use crate::errors::AppResult;
use crate::index;
use crate::journal_core::entry_path_for_subject;
use std::collections::BTreeSet;
use std::io::Write;

/// Prints the paths of all entries declaring any of the given tags, sorted,
/// one per line.
///
/// # Errors
///
/// Propagates index-build errors and `AppError::Io` from the writer.
pub async fn find_entries(config: &Config, tags: &[String], out: &mut dyn Write) -> AppResult<()> {
    let index = index::build_tag_index(&config.journal_root).await?;

    let mut seen: BTreeSet<String> = BTreeSet::new();
    for tag in tags {
        if let Some(keys) = index.entries_for(tag) {
            seen.extend(keys.iter().cloned());
        }
    }

    let paths: Vec<String> = seen
        .iter()
        .map(|key| {
            entry_path_for_subject(&config.journal_root, key)
                .display()
                .to_string()
        })
        .collect();
    writeln!(out, "{}", paths.join("\n"))?;
    Ok(())
}
