//! Core building blocks of the interactive staging loop.
//!
//! This module provides status parsing, the entry list and its cursor, the git
//! collaborator, key input, and the in-place terminal renderer.

pub mod colors;
pub mod diff_view;
pub mod entry;
pub mod entry_list;
pub mod error;
pub mod git;
pub mod keys;
pub mod output;
pub mod status_code;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_support;

// === Error handling ===
pub use error::{GitStagerError, Result};

// === Git operations ===
// Collaborator trait and its `git` command line implementation
pub use git::{GitRepo, Vcs};

// === Status model ===
pub use diff_view::DiffView;
pub use entry::StatusEntry;
pub use entry_list::EntryList;
pub use status_code::{is_merge_conflict, is_staged, StatusCode};

// === Terminal ===
pub use keys::{Action, Key, KeyReader, TerminalKeys};
pub use terminal::{HiddenCursor, TerminalSurface};

// === Output formatting ===
pub use output::print_error;
