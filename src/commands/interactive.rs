//! The interactive staging loop.
//!
//! Each iteration refreshes the entry list from `git status`, redraws the frame in
//! place, then blocks for a single key and applies it. Stage and unstage failures
//! end the loop with an error; the cursor is shown again either way.

use crate::core::{
    entry_list::EntryList,
    error::Result,
    git::{GitRepo, Vcs},
    keys::{Action, KeyReader, TerminalKeys},
    terminal::{HiddenCursor, TerminalSurface},
};
use std::env;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Done,
}

/// Everything the loop mutates between frames
pub struct Session<W: Write> {
    entries: EntryList,
    surface: TerminalSurface,
    out: HiddenCursor<W>,
    state: LoopState,
}

impl<W: Write> Session<W> {
    /// Hides the cursor on `out` until the session is dropped
    pub fn new(out: W) -> Result<Self> {
        Ok(Self {
            entries: EntryList::new(),
            surface: TerminalSurface::new(),
            out: HiddenCursor::new(out)?,
            state: LoopState::Running,
        })
    }

    fn drive(&mut self, vcs: &dyn Vcs, keys: &mut dyn KeyReader) -> Result<()> {
        while self.state == LoopState::Running {
            self.state = self.step(vcs, keys)?;
        }
        Ok(())
    }

    /// Refresh, draw, then wait for and apply one key.
    fn step(&mut self, vcs: &dyn Vcs, keys: &mut dyn KeyReader) -> Result<LoopState> {
        self.entries.refresh(vcs)?;
        self.surface
            .render(&mut self.out, &self.entries, self.entries.current_diff())?;

        if self.entries.is_empty() {
            log::debug!("No changes left to stage");
            return Ok(LoopState::Done);
        }

        let key = keys.read_key()?;
        match Action::from_key(key) {
            Some(action) => {
                log::debug!("Key {key:?} -> {action:?}");
                self.apply(action, vcs)
            }
            None => Ok(LoopState::Running),
        }
    }

    fn apply(&mut self, action: Action, vcs: &dyn Vcs) -> Result<LoopState> {
        match action {
            Action::Top => self.entries.top(),
            Action::Bottom => self.entries.bottom(),
            Action::Middle => self.entries.middle(),
            Action::Down => self.entries.down(),
            Action::Up => self.entries.up(),
            Action::ToggleDiff => {
                self.entries.toggle_diff(vcs);
            }
            Action::ToggleStage => self.entries.toggle(vcs)?,
            Action::Open => {
                // stderr output here would land inside the frame
                if let Err(e) = self.entries.open(vcs) {
                    log::debug!("{e}");
                }
                return Ok(LoopState::Done);
            }
            Action::Quit => return Ok(LoopState::Done),
        }
        Ok(LoopState::Running)
    }
}

/// Run a session to completion, then leave the cursor below the last frame.
///
/// The session is consumed; dropping it shows the cursor again, on the error
/// path as well.
pub fn run_session<W: Write>(
    mut session: Session<W>,
    vcs: &dyn Vcs,
    keys: &mut dyn KeyReader,
) -> Result<()> {
    let result = session.drive(vcs, keys);
    let parked = session.surface.to_below_last_row(&mut session.out);
    result.and(parked)
}

pub fn execute_interactive() -> Result<()> {
    let current_dir = env::current_dir()?;
    let git_repo = GitRepo::open(&current_dir)?;
    let mut keys = TerminalKeys::new()?;

    let session = Session::new(io::stdout())?;
    run_session(session, &git_repo, &mut keys)
}
