//! Render the tag cross-reference index file.

use crate::config::Config;
use crate::constants::DEFAULT_INDEX_FILENAME;
use crate::errors::AppResult;
use crate::index::{self, TagIndex};
use std::fs;
use std::path::Path;
use tracing::info;

/// Builds the tag index and writes its markdown rendering into the journal
/// root.
///
/// The output filename is reduced to its base name, so the rendered index
/// is always contained to the journal root. `.` selects the default
/// `Index.md`.
///
/// # Errors
///
/// Propagates index-build errors (`AppError::Io`, `AppError::Batch`) and
/// `AppError::Io` from the final write.
pub async fn write_index(config: &Config, output: &str) -> AppResult<()> {
    let index = index::build_tag_index(&config.journal_root).await?;

    let filename = match output {
        "." => DEFAULT_INDEX_FILENAME,
        other => Path::new(other)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(DEFAULT_INDEX_FILENAME),
    };

    let path = config.journal_root.join(filename);
    info!("writing {} tag(s) to {}", index.len(), path.display());
    fs::write(&path, render(&index))?;
    Ok(())
}

/// Renders the index as a flat markdown document: one line per tag, each
/// entry key linked.
pub fn render(index: &TagIndex) -> String {
    let mut rendered = String::new();
    for (tag, keys) in index.iter() {
        let links: Vec<String> = keys
            .iter()
            .map(|key| format!("[{}]({})", key, key))
            .collect();
        rendered.push_str(&format!("\n* *{}* {}", tag, links.join(", ")));
    }
    rendered
}
