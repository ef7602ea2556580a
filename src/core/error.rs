//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitStagerError`] which covers every failure the interactive
//! staging loop can run into. It uses `thiserror` for ergonomic error definitions
//! and includes specialized error constructors for common failure scenarios.
//!
//! # Public API
//! - [`GitStagerError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitStagerError>`
//!
//! # Error Categories
//! - **Repository**: Repository not found, git2 library errors
//! - **Git commands**: Failed status, add or reset invocations
//! - **Status parsing**: Malformed records, unsupported merge conflict entries
//! - **Terminal**: I/O errors while drawing or reading keys

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-stager
#[derive(Error, Debug)]
pub enum GitStagerError {
    // Git repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Repository has no working directory")]
    BareRepository,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Git command errors
    #[error("git status failed: {message}")]
    StatusFailed { message: String },

    #[error("Failed to stage '{path}': {message}")]
    StageFailed { path: PathBuf, message: String },

    #[error("Failed to unstage '{path}': {message}")]
    UnstageFailed { path: PathBuf, message: String },

    #[error("Failed to open '{path}': {message}")]
    OpenFailed { path: PathBuf, message: String },

    #[error("git diff failed for '{path}': {message}")]
    DiffFailed { path: PathBuf, message: String },

    // Status parsing errors
    #[error("Malformed status line: '{line}'")]
    MalformedStatusLine { line: String },

    #[error("Merge conflicts are not supported: '{line}'")]
    MergeConflict { line: String },
}

/// Convenience type alias for Results using GitStagerError
pub type Result<T> = std::result::Result<T, GitStagerError>;

impl GitStagerError {
    /// Create a status failed error
    pub fn status_failed(message: impl Into<String>) -> Self {
        Self::StatusFailed {
            message: message.into(),
        }
    }

    /// Create a stage failed error
    pub fn stage_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::StageFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an unstage failed error
    pub fn unstage_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::UnstageFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an open failed error
    pub fn open_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::OpenFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a diff failed error
    pub fn diff_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DiffFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a malformed status line error
    pub fn malformed_status_line(line: impl Into<String>) -> Self {
        Self::MalformedStatusLine { line: line.into() }
    }

    /// Create a merge conflict error
    pub fn merge_conflict(line: impl Into<String>) -> Self {
        Self::MergeConflict { line: line.into() }
    }

    /// Whether this error came from a staging mutation (add or reset)
    pub fn is_stage_failure(&self) -> bool {
        matches!(self, Self::StageFailed { .. } | Self::UnstageFailed { .. })
    }
}
