//! Error types for listing and rendering

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while inspecting a directory tree.
#[derive(Error, Debug)]
pub enum TreeError {
    /// The directory could not be opened (missing, not a directory, permission denied).
    #[error("cannot open directory '{}': {source}", path.display())]
    DirectoryOpen { path: PathBuf, source: io::Error },

    /// Enumeration failed after the directory was opened.
    #[error("cannot read directory '{}': {source}", path.display())]
    DirectoryRead { path: PathBuf, source: io::Error },

    #[error("out of memory while listing '{}': {source}", path.display())]
    Allocation {
        path: PathBuf,
        source: TryReserveError,
    },

    #[error("cannot determine current directory: {0}")]
    CurrentDir(io::Error),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl TreeError {
    /// Whether the error only affects one subtree.
    ///
    /// Recoverable errors are reported and traversal continues with the
    /// next sibling; everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TreeError::DirectoryOpen { .. }
                | TreeError::DirectoryRead { .. }
                | TreeError::Allocation { .. }
        )
    }
}

/// Result type alias for tree operations
pub type Result<T> = std::result::Result<T, TreeError>;
