//! Git Stager - interactive single-key staging of working tree changes.
//!
//! The library parses `git status --porcelain` into typed entries, keeps a cursor
//! over them across refreshes, draws them in place with relative cursor movement,
//! and maps single keypresses to navigation and stage/unstage commands.
//!
//! # Public API
//! The building blocks are re-exported from the [`core`] module; the loop itself
//! lives in [`commands::interactive`].

pub mod commands;
pub mod core;

pub use core::{
    Action,
    DiffView,
    EntryList,
    // Error handling
    GitStagerError,
    // Git operations
    GitRepo,
    HiddenCursor,
    Key,
    KeyReader,
    Result,
    StatusCode,
    // Status model
    StatusEntry,
    TerminalKeys,
    // Terminal
    TerminalSurface,
    Vcs,
};
