//! Error types for template-rename.
//!
//! Only run-aborting failures are errors. Per-file problems during the
//! replacement and relocation passes are reported as outcome values instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a placeholder replacement run.
#[derive(Debug, Error)]
pub enum ReplaceError {
    /// Invalid project name.
    #[error("Invalid project name '{0}': {1}")]
    InvalidName(String, String),

    /// Project root does not exist.
    #[error("Project root directory does not exist: {0}")]
    RootNotFound(PathBuf),

    /// No primary build descriptor at the project root.
    #[error("No CMakeLists.txt found in {0}. This doesn't appear to be a cpp-template project")]
    NotATemplateProject(PathBuf),

    /// Backup snapshot could not be written.
    #[error("Failed to create backup at {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// User declined confirmation.
    ///
    /// Not a failure; the process exits successfully.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for template-rename operations.
pub type Result<T> = std::result::Result<T, ReplaceError>;
