//! Synchronize journal entries from the remote.

use crate::config::Config;
use crate::errors::AppResult;
use crate::git::GitRunner;
use tracing::info;

/// Pulls the journal repository from its remote.
///
/// # Errors
///
/// Returns `AppError::Git` when the pull fails.
pub fn sync_journal(config: &Config, git: &dyn GitRunner) -> AppResult<()> {
    info!("pulling journal at {}", config.journal_root.display());
    git.pull(&config.journal_root)
}
