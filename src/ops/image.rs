//! Attach an image to a journal entry.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::journal_core::{
    attachments_dir, entry_path_for_date, entry_path_for_subject, ContextDate,
};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Copies the image into the journal's attachments directory and appends a
/// markdown link block to the target entry, creating the entry if needed.
///
/// The entry is addressed by `subject` when given, and by the operative
/// date otherwise.
///
/// # Errors
///
/// Returns `AppError::Journal` when the image path has no usable file name
/// and `AppError::Io` for filesystem failures.
pub fn attach_image(
    config: &Config,
    context: ContextDate,
    subject: Option<&str>,
    image_path: &Path,
) -> AppResult<()> {
    let image_name = image_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            AppError::Journal(format!(
                "image path has no file name: {}",
                image_path.display()
            ))
        })?;

    let data = fs::read(image_path)?;

    let attachments = attachments_dir(&config.journal_root);
    fs::create_dir_all(&attachments)?;
    fs::write(attachments.join(image_name), data)?;
    debug!("copied {} into {}", image_name, attachments.display());

    let entry_path = match subject {
        Some(subject) => entry_path_for_subject(&config.journal_root, subject),
        None => entry_path_for_date(&config.journal_root, context.date),
    };

    let mut entry = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&entry_path)?;
    entry.write_all(format!("\n\n---\n\n![](bin/{})", image_name).as_bytes())?;

    info!("attached {} to {}", image_name, entry_path.display());
    Ok(())
}
