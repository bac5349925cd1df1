//! Constants used throughout the application.
//!
//! This module contains all constants used in the Daybook application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "daybook";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A plain-file journal with tag indexing";

// CLI Arguments & Defaults
/// Default command for the editor if not specified otherwise.
pub const DEFAULT_EDITOR_COMMAND: &str = "vim";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the journal root directory.
pub const ENV_VAR_DAYBOOK_DIR: &str = "DAYBOOK_DIR";
/// Environment variable for specifying the preferred Daybook editor.
pub const ENV_VAR_DAYBOOK_EDITOR: &str = "DAYBOOK_EDITOR";
/// Standard environment variable for specifying the default editor.
pub const ENV_VAR_EDITOR: &str = "EDITOR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default journal directory within the user's home directory.
pub const DEFAULT_JOURNAL_SUBDIR: &str = "journal";

// Validation
/// Characters forbidden in editor commands for security reasons.
pub const EDITOR_FORBIDDEN_CHARS: &[char] =
    &['|', '&', ';', '$', '(', ')', '`', '\\', '<', '>', '\'', '"'];

// File System Layout
/// Sub-directory of the journal root holding one file per entry.
pub const ENTRIES_SUBDIR: &str = "entries";
/// Sub-directory of the journal root holding binary attachments.
pub const ATTACHMENTS_SUBDIR: &str = "bin";
/// File extension for journal entries.
pub const JOURNAL_FILE_EXTENSION: &str = ".md";
/// Default filename for the rendered tag index.
pub const DEFAULT_INDEX_FILENAME: &str = "Index.md";

// Entry Header Framing
/// Fence line delimiting the frontmatter header block.
pub const FRONTMATTER_FENCE: &str = "---";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

// Git Integration
/// Remote name used when pushing memorized entries.
pub const GIT_REMOTE: &str = "origin";
/// Branch name used when pushing memorized entries.
pub const GIT_BRANCH: &str = "master";
/// Commit message used by the memorize command.
pub const MEMORIZE_COMMIT_MESSAGE: &str = "Memorized journal";
