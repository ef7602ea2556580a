//! Predicates for validating git-stager output

#![allow(dead_code)]

use predicates::prelude::*;

/// Error banner for running outside a repository
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Error banner for a repository with unresolved conflicts
pub fn merge_conflict_unsupported() -> impl Predicate<str> {
    predicates::str::contains("Merge conflicts are not supported")
}

/// The cursor was shown again before exit
pub fn cursor_restored() -> impl Predicate<str> {
    predicates::str::contains("\u{1b}[?25h")
}

/// The key reference printed by --help
pub fn has_key_help() -> impl Predicate<str> {
    predicates::str::contains("Keys:")
        .and(predicates::str::contains("Stage or unstage the current entry"))
}
