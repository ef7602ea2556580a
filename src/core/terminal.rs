//! In-place frame rendering with relative cursor movement.
//!
//! The tool never clears the screen or enters the alternate screen. Each frame is
//! printed starting at the row the cursor sits on, then the cursor is walked back
//! up to that first row so the next frame overwrites it. This only works while
//! [`TerminalSurface`] knows exactly how many rows it printed last time.
//!
//! # Public API
//! - [`TerminalSurface`]: Draws entry list + optional diff and tracks frame height
//! - [`HiddenCursor`]: Writer wrapper that hides the cursor for its lifetime

use crate::core::diff_view::DiffView;
use crate::core::entry_list::EntryList;
use crate::core::error::Result;
use crossterm::{
    cursor::{Hide, MoveDown, MoveToColumn, MoveUp, Show},
    execute, queue,
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, Default)]
pub struct TerminalSurface {
    /// Rows printed by the last frame
    height: usize,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Entry rows, plus diff rows and one separator row when a diff is shown
    pub fn frame_height(entries: &EntryList, diff: Option<&DiffView>) -> usize {
        entries.count() + diff.map_or(0, |view| view.line_count() + 1)
    }

    /// Erase the previous frame, draw a new one, and park the cursor on its first row.
    pub fn render<W: Write>(
        &mut self,
        out: &mut W,
        entries: &EntryList,
        diff: Option<&DiffView>,
    ) -> Result<()> {
        // A diff without rows below it would leave the cursor one row off.
        let diff = diff.filter(|_| !entries.is_empty());

        // Build rows first so a failing entry never leaves a half-drawn frame.
        let rows = entries.render()?;
        let height = Self::frame_height(entries, diff);

        queue!(out, Clear(ClearType::FromCursorDown))?;
        if let Some(view) = diff {
            out.write_all(view.render().as_bytes())?;
            out.write_all(b"\n")?;
        }
        out.write_all(rows.as_bytes())?;

        queue!(out, MoveToColumn(0))?;
        if height > 1 {
            queue!(out, MoveUp(row_count(height - 1)))?;
        }
        out.flush()?;

        self.height = height;
        Ok(())
    }

    /// Leave the cursor on a fresh line below the last frame.
    ///
    /// Ends with a newline rather than a relative move so the terminal scrolls
    /// when the frame already touches the bottom of the viewport.
    pub fn to_below_last_row<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.height == 0 {
            return Ok(());
        }

        if self.height > 1 {
            queue!(out, MoveDown(row_count(self.height - 1)))?;
        }
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

fn row_count(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Hides the terminal cursor until dropped.
///
/// Dropping shows the cursor again on every exit path: normal return, `?`
/// propagation, or a panic unwinding through the owner.
pub struct HiddenCursor<W: Write> {
    out: W,
}

impl<W: Write> HiddenCursor<W> {
    pub fn new(mut out: W) -> Result<Self> {
        execute!(out, Hide)?;
        Ok(Self { out })
    }
}

impl<W: Write> Write for HiddenCursor<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for HiddenCursor<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show);
    }
}
