//! A single status record and the operations that act on it.
//!
//! [`StatusEntry`] wraps one `XY path` line from `git status --porcelain`. It never
//! changes after parsing: staging mutates the repository, and the effect shows up in
//! the next refresh as a brand new entry.

use crate::core::colors::{index_status_colored, worktree_status_colored};
use crate::core::diff_view::DiffView;
use crate::core::error::{GitStagerError, Result};
use crate::core::git::Vcs;
use crate::core::status_code::{is_merge_conflict, is_staged, StatusCode};
use std::path::PathBuf;

const RENAME_SEPARATOR: &str = " -> ";

/// One line of porcelain status output
#[derive(Debug, Clone)]
pub struct StatusEntry {
    line: String,
    index: StatusCode,
    worktree: StatusCode,
}

impl StatusEntry {
    /// Parse a porcelain record: two status characters, a space, then the path field.
    pub fn parse(line: &str) -> Result<Self> {
        let mut chars = line.chars();
        let (Some(x), Some(y), Some(' ')) = (chars.next(), chars.next(), chars.next()) else {
            return Err(GitStagerError::malformed_status_line(line));
        };
        if chars.as_str().is_empty() {
            return Err(GitStagerError::malformed_status_line(line));
        }

        let index =
            StatusCode::try_from(x).map_err(|_| GitStagerError::malformed_status_line(line))?;
        let worktree =
            StatusCode::try_from(y).map_err(|_| GitStagerError::malformed_status_line(line))?;

        Ok(StatusEntry {
            line: line.to_string(),
            index,
            worktree,
        })
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn index_status(&self) -> StatusCode {
        self.index
    }

    pub fn worktree_status(&self) -> StatusCode {
        self.worktree
    }

    /// The path field as printed by git; `old -> new` for renames
    pub fn path(&self) -> &str {
        &self.line[3..]
    }

    pub fn is_staged(&self) -> bool {
        is_staged(self.index)
    }

    pub fn is_merge_conflict(&self) -> bool {
        is_merge_conflict(self.index, self.worktree)
    }

    /// `(old, new)` for a rename entry
    pub fn rename_paths(&self) -> Option<(PathBuf, PathBuf)> {
        split_rename(self.path()).map(|(old, new)| (unquote_path(old), unquote_path(new)))
    }

    /// The path commands should act on: the destination side of a rename
    pub fn target_path(&self) -> PathBuf {
        match self.rename_paths() {
            Some((_, new)) => new,
            None => unquote_path(self.path()),
        }
    }

    /// Status characters colored by staging state, followed by the path.
    pub fn render(&self) -> Result<String> {
        if self.is_merge_conflict() {
            return Err(GitStagerError::merge_conflict(&self.line));
        }

        Ok(format!(
            "{}{} {}",
            index_status_colored(self.index, self.is_staged()),
            worktree_status_colored(self.worktree),
            self.path()
        ))
    }

    /// Unstage a staged entry, stage anything else. Conflicts are left alone.
    pub fn toggle(&self, vcs: &dyn Vcs) -> Result<()> {
        if self.is_merge_conflict() {
            log::debug!("Ignoring toggle on merge conflict '{}'", self.line);
            return Ok(());
        }

        if self.is_staged() {
            self.unstage(vcs)
        } else {
            self.stage(vcs)
        }
    }

    pub fn stage(&self, vcs: &dyn Vcs) -> Result<()> {
        let offset = vcs.repo_root_offset();
        match self.rename_paths() {
            Some((old, new)) => {
                vcs.stage(&offset.join(new))?;
                vcs.stage(&offset.join(old))
            }
            None => vcs.stage(&offset.join(self.target_path())),
        }
    }

    /// Renames reset both sides, destination first.
    pub fn unstage(&self, vcs: &dyn Vcs) -> Result<()> {
        let offset = vcs.repo_root_offset();
        match self.rename_paths() {
            Some((old, new)) => {
                vcs.unstage(&offset.join(new))?;
                vcs.unstage(&offset.join(old))
            }
            None => vcs.unstage(&offset.join(self.target_path())),
        }
    }

    pub fn open(&self, vcs: &dyn Vcs) -> Result<()> {
        vcs.open(&vcs.repo_root_offset().join(self.target_path()))
    }

    /// Diff of this entry; a failed diff yields an empty view.
    pub fn diff(&self, vcs: &dyn Vcs) -> DiffView {
        let path = vcs.repo_root_offset().join(self.target_path());
        match vcs.diff(&path, self.is_staged()) {
            Ok(text) => DiffView::new(text),
            Err(e) => {
                log::debug!("{e}");
                DiffView::new(String::new())
            }
        }
    }
}

impl PartialEq for StatusEntry {
    fn eq(&self, other: &Self) -> bool {
        self.line == other.line
    }
}

impl Eq for StatusEntry {}

/// Split `old -> new` at the separator between the two path fields.
///
/// A quoted field is one path even when it contains the separator.
fn split_rename(field: &str) -> Option<(&str, &str)> {
    if !field.starts_with('"') {
        return field.split_once(RENAME_SEPARATOR);
    }
    let end = closing_quote(field)?;
    let (old, rest) = field.split_at(end + 1);
    rest.strip_prefix(RENAME_SEPARATOR).map(|new| (old, new))
}

/// Byte index of the quote that closes a quoted field
fn closing_quote(field: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, b) in field.bytes().enumerate().skip(1) {
        match b {
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'"' => return Some(i),
            _ => {}
        }
    }
    None
}

/// Undo git's C-style quoting of a path (`"a\tb"`, `"\303\251"`).
///
/// Unquoted input is returned unchanged.
pub fn unquote_path(field: &str) -> PathBuf {
    let Some(inner) = field
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return PathBuf::from(field);
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut iter = inner.bytes().peekable();
    while let Some(b) = iter.next() {
        if b != b'\\' {
            bytes.push(b);
            continue;
        }
        match iter.next() {
            Some(b'n') => bytes.push(b'\n'),
            Some(b't') => bytes.push(b'\t'),
            Some(b'r') => bytes.push(b'\r'),
            Some(b'a') => bytes.push(0x07),
            Some(b'b') => bytes.push(0x08),
            Some(b'f') => bytes.push(0x0c),
            Some(b'v') => bytes.push(0x0b),
            Some(d @ b'0'..=b'7') => {
                let mut digits = vec![d];
                while digits.len() < 3 {
                    match iter.peek() {
                        Some(&o) if (b'0'..=b'7').contains(&o) => {
                            digits.push(o);
                            iter.next();
                        }
                        _ => break,
                    }
                }
                let value = digits
                    .iter()
                    .fold(0u32, |acc, digit| acc * 8 + u32::from(digit - b'0'));
                match u8::try_from(value) {
                    Ok(byte) => bytes.push(byte),
                    // out of byte range, keep the escape as written
                    Err(_) => {
                        bytes.push(b'\\');
                        bytes.extend_from_slice(&digits);
                    }
                }
            }
            Some(other) => bytes.push(other),
            None => bytes.push(b'\\'),
        }
    }

    PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
}
