//! Editor abstraction for opening journal entries.
//!
//! This module provides an abstraction for opening files in an external
//! editor, allowing the application to work with different editors and to be
//! testable by mocking the editor functionality.

use crate::errors::{AppResult, EditorError};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Trait defining the interface for an editor component.
///
/// This trait abstracts the functionality of opening files in an editor,
/// allowing different implementations for different use cases (e.g.,
/// a real system editor or a mock editor for testing).
///
/// # Examples
///
/// ```
/// use daybook::editor::Editor;
/// use daybook::errors::AppResult;
/// use std::path::PathBuf;
///
/// struct DummyEditor;
///
/// impl Editor for DummyEditor {
///     fn open_files(&self, paths: &[PathBuf]) -> AppResult<()> {
///         println!("Would open files: {:?}", paths);
///         Ok(())
///     }
/// }
///
/// let editor = DummyEditor;
/// editor.open_files(&[PathBuf::from("entry.md")]).unwrap();
/// ```
pub trait Editor {
    /// Opens one or more files in the editor.
    ///
    /// # Errors
    ///
    /// Different implementations may return different errors when file
    /// opening fails.
    fn open_files(&self, paths: &[PathBuf]) -> AppResult<()>;
}

/// An implementation of the Editor trait that launches an external editor
/// process with the file paths as arguments and waits for it to exit.
pub struct SystemEditor {
    /// The command to use for opening files (e.g., "vim", "code", "nano").
    pub editor_cmd: String,
}

impl Editor for SystemEditor {
    /// Opens the specified files with the configured editor command.
    ///
    /// If the list of paths is empty, the method returns immediately with
    /// Ok(()).
    ///
    /// # Errors
    ///
    /// Returns `AppError::Editor` with a specific `EditorError` variant:
    /// - `CommandNotFound` if the editor command does not exist
    /// - `PermissionDenied` if the editor is not executable
    /// - `ExecutionFailed` for other I/O errors during execution
    /// - `NonZeroExit` if the editor exits with a non-zero status code
    fn open_files(&self, paths: &[PathBuf]) -> AppResult<()> {
        if paths.is_empty() {
            return Ok(());
        }

        debug!("launching editor {} with {} files", self.editor_cmd, paths.len());

        let status = Command::new(&self.editor_cmd).args(paths).status();
        match status {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(EditorError::CommandNotFound {
                    command: self.editor_cmd.clone(),
                    source: e,
                }
                .into())
            }
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Err(EditorError::PermissionDenied {
                    command: self.editor_cmd.clone(),
                    source: e,
                }
                .into())
            }
            Err(e) => Err(EditorError::ExecutionFailed {
                command: self.editor_cmd.clone(),
                source: e,
            }
            .into()),
            Ok(status) if !status.success() => Err(EditorError::NonZeroExit {
                command: self.editor_cmd.clone(),
                status_code: status.code().unwrap_or(-1),
            }
            .into()),
            Ok(_) => Ok(()),
        }
    }
}
