//! Commit and push all journal entries.

use crate::config::Config;
use crate::constants::{GIT_BRANCH, GIT_REMOTE, MEMORIZE_COMMIT_MESSAGE};
use crate::errors::AppResult;
use crate::git::GitRunner;
use tracing::info;

/// Stages, commits, and pushes the whole journal.
///
/// # Errors
///
/// Returns `AppError::Git` when any of the three steps fails; earlier steps
/// are not undone.
pub fn memorize_journal(config: &Config, git: &dyn GitRunner) -> AppResult<()> {
    info!("memorizing journal at {}", config.journal_root.display());

    git.stage_all(&config.journal_root)?;
    git.commit_all(&config.journal_root, MEMORIZE_COMMIT_MESSAGE)?;
    git.push(&config.journal_root, GIT_REMOTE, GIT_BRANCH)
}
