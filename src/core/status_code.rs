//! Type-safe porcelain status characters and change classification.
//!
//! Each `git status --porcelain` record starts with two status characters: the
//! index status and the work tree status. [`StatusCode`] gives each character a
//! variant, and the free functions [`is_staged`] and [`is_merge_conflict`] classify
//! a pair over a fixed table. Nothing is cached; callers reclassify on every access.

use std::fmt;

/// One porcelain status character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// Unmodified (' ')
    Unmodified,
    /// Modified (M)
    Modified,
    /// Type changed (T)
    TypeChanged,
    /// Added (A)
    Added,
    /// Deleted (D)
    Deleted,
    /// Renamed (R)
    Renamed,
    /// Copied (C)
    Copied,
    /// Updated but unmerged (U)
    Unmerged,
    /// Untracked (?)
    Untracked,
    /// Ignored (!)
    Ignored,
}

impl StatusCode {
    pub const ALL: [StatusCode; 10] = [
        StatusCode::Unmodified,
        StatusCode::Modified,
        StatusCode::TypeChanged,
        StatusCode::Added,
        StatusCode::Deleted,
        StatusCode::Renamed,
        StatusCode::Copied,
        StatusCode::Unmerged,
        StatusCode::Untracked,
        StatusCode::Ignored,
    ];

    /// The porcelain character for this code
    pub fn as_char(&self) -> char {
        match self {
            StatusCode::Unmodified => ' ',
            StatusCode::Modified => 'M',
            StatusCode::TypeChanged => 'T',
            StatusCode::Added => 'A',
            StatusCode::Deleted => 'D',
            StatusCode::Renamed => 'R',
            StatusCode::Copied => 'C',
            StatusCode::Unmerged => 'U',
            StatusCode::Untracked => '?',
            StatusCode::Ignored => '!',
        }
    }
}

impl TryFrom<char> for StatusCode {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        match c {
            ' ' => Ok(StatusCode::Unmodified),
            'M' => Ok(StatusCode::Modified),
            'T' => Ok(StatusCode::TypeChanged),
            'A' => Ok(StatusCode::Added),
            'D' => Ok(StatusCode::Deleted),
            'R' => Ok(StatusCode::Renamed),
            'C' => Ok(StatusCode::Copied),
            'U' => Ok(StatusCode::Unmerged),
            '?' => Ok(StatusCode::Untracked),
            '!' => Ok(StatusCode::Ignored),
            other => Err(other),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A change is staged when the index column records one of M, A, D, R or C.
pub fn is_staged(index: StatusCode) -> bool {
    matches!(
        index,
        StatusCode::Modified
            | StatusCode::Added
            | StatusCode::Deleted
            | StatusCode::Renamed
            | StatusCode::Copied
    )
}

/// Unmerged pairs: either side U, or both sides A, or both sides D.
pub fn is_merge_conflict(index: StatusCode, worktree: StatusCode) -> bool {
    use StatusCode::*;

    matches!(
        (index, worktree),
        (Unmerged, _) | (_, Unmerged) | (Added, Added) | (Deleted, Deleted)
    )
}
