//! The ordered entry list, its cursor, and the remembered diff.
//!
//! The list is rebuilt from fresh status text on every refresh. Entries keep the
//! order git printed them in. The cursor survives a refresh by index and is
//! clamped when the list shrinks underneath it.

use crate::core::diff_view::DiffView;
use crate::core::entry::StatusEntry;
use crate::core::error::Result;
use crate::core::git::Vcs;

#[derive(Debug, Default)]
pub struct EntryList {
    entries: Vec<StatusEntry>,
    cursor: usize,
    /// Last diffed entry, matched against the current entry by line content
    diff: Option<(StatusEntry, DiffView)>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse status text into entries, one per non-empty line, in order.
    pub fn parse(status: &str) -> Result<Vec<StatusEntry>> {
        status
            .lines()
            .filter(|line| !line.is_empty())
            .map(StatusEntry::parse)
            .collect()
    }

    /// Re-fetch status and replace every entry.
    pub fn refresh(&mut self, vcs: &dyn Vcs) -> Result<&mut Self> {
        let status = vcs.status()?;
        let entries = Self::parse(&status)?;
        log::debug!("Refreshed status: {} entries", entries.len());
        self.replace_entries(entries);
        Ok(self)
    }

    pub fn replace_entries(&mut self, entries: Vec<StatusEntry>) {
        self.entries = entries;
        if self.cursor >= self.entries.len() {
            self.bottom();
        }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    pub fn current(&self) -> Option<&StatusEntry> {
        self.entries.get(self.cursor)
    }

    /// One row per entry: cursor marker, space, rendered entry.
    ///
    /// The last row has no trailing newline so the terminal cursor stays on it.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            let marker = if i == self.cursor { '>' } else { ' ' };
            out.push(marker);
            out.push(' ');
            out.push_str(&entry.render()?);
            if i + 1 < self.entries.len() {
                out.push('\n');
            }
        }
        Ok(out)
    }

    pub fn toggle(&self, vcs: &dyn Vcs) -> Result<()> {
        match self.current() {
            Some(entry) => entry.toggle(vcs),
            None => Ok(()),
        }
    }

    pub fn open(&self, vcs: &dyn Vcs) -> Result<()> {
        match self.current() {
            Some(entry) => entry.open(vcs),
            None => Ok(()),
        }
    }

    /// The remembered diff, if it belongs to the current entry
    pub fn current_diff(&self) -> Option<&DiffView> {
        let current = self.current()?;
        match &self.diff {
            Some((entry, view)) if entry == current => Some(view),
            _ => None,
        }
    }

    /// Hide the diff of the current entry if shown, otherwise fetch and show it.
    pub fn toggle_diff(&mut self, vcs: &dyn Vcs) -> Option<&DiffView> {
        if self.current_diff().is_some() {
            self.diff = None;
            return None;
        }

        let current = self.current()?.clone();
        let view = current.diff(vcs);
        self.diff = Some((current, view));
        self.diff.as_ref().map(|(_, view)| view)
    }

    pub fn down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    pub fn up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn top(&mut self) {
        self.cursor = 0;
    }

    pub fn bottom(&mut self) {
        self.cursor = self.entries.len().saturating_sub(1);
    }

    pub fn middle(&mut self) {
        self.cursor = self.entries.len() / 2;
        if self.cursor >= self.entries.len() {
            self.bottom();
        }
    }
}
