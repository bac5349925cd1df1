//! Error handling utilities for the daybook application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! The core engine never logs, prints, or terminates the process. Every failure
//! is surfaced as a typed error and rendered by the CLI layer in `main`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents the ways an entry file can fail to decode.
///
/// The codec is strict: a well-formed entry always begins with a fenced
/// frontmatter header. A missing or unterminated fence, a malformed header
/// block, or a date field that does not match the expected timestamp format
/// are all decode failures, never silent defaults. A header without a `tags`
/// list or without a `date` field is still well-formed.
///
/// # Examples
///
/// ```
/// use daybook::errors::ParseError;
///
/// let error = ParseError::MissingFence;
/// assert!(format!("{}", error).contains("fence"));
/// ```
#[derive(Debug, Error)]
pub enum ParseError {
    /// The entry does not begin with a frontmatter fence line.
    #[error("entry does not begin with a frontmatter fence")]
    MissingFence,

    /// The opening fence has no matching closing fence.
    #[error("frontmatter fence is never terminated")]
    UnterminatedFence,

    /// The header block between the fences is not valid YAML.
    #[error("malformed frontmatter header: {0}")]
    Header(#[from] serde_yaml::Error),

    /// The header's date field does not match the expected timestamp format.
    #[error("invalid entry date: {0}")]
    Date(#[from] chrono::ParseError),
}

/// Represents specific error cases that can occur when interacting with
/// external editors.
///
/// Each variant captures the editor command and, where available, the
/// underlying I/O error so the CLI can explain what went wrong.
///
/// # Examples
///
/// ```
/// use daybook::errors::EditorError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "command not found");
/// let error = EditorError::CommandNotFound {
///     command: "vim".to_string(),
///     source: io_error,
/// };
///
/// assert!(format!("{}", error).contains("not found"));
/// assert!(format!("{}", error).contains("vim"));
/// ```
#[derive(Debug, Error)]
pub enum EditorError {
    /// Error when the specified editor command cannot be found.
    #[error("editor command '{command}' not found: {source}. Please check that the editor is installed and available in your PATH.")]
    CommandNotFound {
        /// The editor command that was not found
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when permission is denied to execute the editor command.
    #[error("permission denied when trying to execute editor '{command}': {source}")]
    PermissionDenied {
        /// The editor command that had permission denied
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the editor command fails to execute due to other I/O errors.
    #[error("failed to execute editor '{command}': {source}")]
    ExecutionFailed {
        /// The editor command that failed to execute
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the editor exits with a non-zero status code.
    #[error("editor '{command}' exited with non-zero status code: {status_code}")]
    NonZeroExit {
        /// The editor command that exited with a non-zero status
        command: String,
        /// The exit status code
        status_code: i32,
    },
}

/// Represents failures when shelling out to the version-control tool.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be launched at all.
    #[error("failed to launch git: {0}. Is git installed and on your PATH?")]
    Launch(#[source] io::Error),

    /// A git subcommand ran but reported failure.
    #[error("git {operation} failed with exit status {status}")]
    CommandFailed {
        /// The git operation that failed (pull, commit, push, ...)
        operation: String,
        /// The reported exit status
        status: i32,
    },
}

/// Represents all possible errors that can occur in the daybook application.
///
/// This enum is the central error type used across the application, with
/// variants for different error categories. It uses `thiserror` for deriving
/// the `Error` trait implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use daybook::errors::AppError;
///
/// let error = AppError::Config("Missing journal directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing journal directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use daybook::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An entry file failed to decode, labeled with the offending path.
    #[error("failed to parse entry {path}: {source}")]
    Parse {
        /// Path of the entry that failed to decode
        path: PathBuf,
        /// The decode failure
        #[source]
        source: ParseError,
    },

    /// A user-supplied date string does not name a real calendar date.
    #[error("unable to parse date '{input}': {source}. Must be in the form of YYYY-MM-DD")]
    DateParse {
        /// The rejected input string
        input: String,
        /// The underlying chrono parse error
        #[source]
        source: chrono::ParseError,
    },

    /// The first error encountered among a batch of concurrent entry reads.
    ///
    /// Partial successes from the same batch are discarded; a corrupted entry
    /// silently excluded from the tag index would be a worse outcome than
    /// refusing to build the index at all.
    #[error("journal scan failed: {0}")]
    Batch(#[source] Box<AppError>),

    /// Errors in journal entry logic (e.g., an unresolvable entry target).
    #[error("Journal logic error: {0}")]
    Journal(String),

    /// Errors when interacting with the text editor.
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    /// Errors when shelling out to git.
    #[error("Git error: {0}")]
    Git(#[from] GitError),
}

impl AppError {
    /// Labels a decode failure with the path of the entry it came from.
    pub fn parse(path: impl Into<PathBuf>, source: ParseError) -> Self {
        AppError::Parse {
            path: path.into(),
            source,
        }
    }
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
///
/// # Examples
///
/// ```
/// use daybook::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Journal("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
