//! Configuration management for the daybook application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It supports configuring the
//! journal root directory and the editor command used to open journal files.
//!
//! # Environment Variables
//!
//! - `DAYBOOK_DIR`: Path to the journal root (defaults to ~/journal)
//! - `DAYBOOK_EDITOR`: Editor to use for journal entries
//! - `EDITOR`: Fallback editor if DAYBOOK_EDITOR is not set (defaults to "vim")
//! - `HOME`: Used for expanding the default journal directory path

use crate::constants::{
    DEFAULT_EDITOR_COMMAND, DEFAULT_JOURNAL_SUBDIR, EDITOR_FORBIDDEN_CHARS, ENV_VAR_DAYBOOK_DIR,
    ENV_VAR_DAYBOOK_EDITOR, ENV_VAR_EDITOR, ENV_VAR_HOME,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the daybook application.
///
/// This struct holds the configuration settings needed for the application,
/// including the editor command to use for opening journal entries and the
/// root directory where the journal lives.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use daybook::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     editor: "nano".to_string(),
///     journal_root: PathBuf::from("/path/to/journal"),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Editor command to use for opening journal entries.
    ///
    /// This is loaded from environment variables in the following order of
    /// precedence:
    /// 1. DAYBOOK_EDITOR
    /// 2. EDITOR
    /// 3. Defaults to "vim" if neither is set
    pub editor: String,

    /// Root directory of the journal; entries live in `entries/` below it.
    ///
    /// This is loaded from the DAYBOOK_DIR environment variable with a
    /// fallback to ~/journal if not specified.
    pub journal_root: PathBuf,
}

impl Config {
    /// Validates an editor command string for security.
    ///
    /// This function checks that the editor command:
    /// - Is not empty
    /// - Contains no shell metacharacters
    /// - Contains no spaces
    fn validate_editor_command(editor_cmd: &str) -> AppResult<&str> {
        // Check for empty string
        if editor_cmd.is_empty() {
            return Err(AppError::Config(
                "Editor command cannot be empty".to_string(),
            ));
        }

        // Check for spaces
        if editor_cmd.contains(' ') {
            return Err(AppError::Config(
                "Editor command cannot contain spaces. Use a wrapper script or shell alias for editors requiring arguments".to_string(),
            ));
        }

        // Check for shell metacharacters
        for &ch in EDITOR_FORBIDDEN_CHARS.iter() {
            if editor_cmd.contains(ch) {
                return Err(AppError::Config(format!(
                    "Editor command cannot contain shell metacharacters: '{}'. Use a wrapper script or shell alias instead",
                    ch
                )));
            }
        }

        Ok(editor_cmd)
    }

    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The journal root path is expanded with `shellexpand` to handle `~`
    /// and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The journal root path expansion fails
    /// - The editor command fails validation (empty, contains spaces or
    ///   shell metacharacters)
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use daybook::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Loaded config with editor: {}", config.editor),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        // Get editor from DAYBOOK_EDITOR or EDITOR env vars, fallback to vim
        let editor_raw = env::var(ENV_VAR_DAYBOOK_EDITOR)
            .or_else(|_| env::var(ENV_VAR_EDITOR))
            .unwrap_or_else(|_| DEFAULT_EDITOR_COMMAND.to_string());

        // Validate the editor command
        let editor = Config::validate_editor_command(&editor_raw)?;

        // Get journal root from DAYBOOK_DIR env var, fallback to ~/journal
        let journal_root_raw = env::var(ENV_VAR_DAYBOOK_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_JOURNAL_SUBDIR)
        });

        let journal_root = shellexpand::full(&journal_root_raw)
            .map_err(|e| {
                AppError::Config(format!(
                    "Failed to expand journal directory path '{}': {}",
                    journal_root_raw, e
                ))
            })?
            .into_owned();

        Ok(Config {
            editor: editor.to_string(),
            journal_root: PathBuf::from(journal_root),
        })
    }

    /// Validates the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the journal root is not an absolute
    /// path after expansion.
    pub fn validate(&self) -> AppResult<()> {
        if !self.journal_root.is_absolute() {
            return Err(AppError::Config(format!(
                "Journal directory path must be absolute: {}",
                self.journal_root.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_editor_command_accepts_simple_command() {
        assert_eq!(Config::validate_editor_command("vim").unwrap(), "vim");
        assert_eq!(Config::validate_editor_command("nano").unwrap(), "nano");
    }

    #[test]
    fn test_validate_editor_command_rejects_empty() {
        let result = Config::validate_editor_command("");
        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_validate_editor_command_rejects_spaces() {
        let result = Config::validate_editor_command("code --wait");
        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("spaces")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_validate_editor_command_rejects_metacharacters() {
        for cmd in ["vim;rm", "vim|cat", "vim$(id)", "vim`id`"] {
            assert!(
                Config::validate_editor_command(cmd).is_err(),
                "should reject {:?}",
                cmd
            );
        }
    }

    #[test]
    fn test_validate_rejects_relative_journal_root() {
        let config = Config {
            editor: "vim".to_string(),
            journal_root: PathBuf::from("relative/journal"),
        };

        match config.validate() {
            Err(AppError::Config(msg)) => assert!(msg.contains("absolute")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_validate_accepts_absolute_journal_root() {
        let config = Config {
            editor: "vim".to_string(),
            journal_root: PathBuf::from("/home/user/journal"),
        };

        assert!(config.validate().is_ok());
    }
}
