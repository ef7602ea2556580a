//! In-memory [`Vcs`] double that records every call.

use crate::core::error::{GitStagerError, Result};
use crate::core::git::Vcs;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Status,
    Stage(PathBuf),
    Unstage(PathBuf),
    Diff(PathBuf, bool),
    Open(PathBuf),
}

pub struct RecordingVcs {
    status: RefCell<String>,
    diff: String,
    offset: PathBuf,
    failing: Option<PathBuf>,
    calls: RefCell<Vec<Call>>,
}

impl RecordingVcs {
    pub fn new(status: &str) -> Self {
        Self {
            status: RefCell::new(status.to_string()),
            diff: String::new(),
            offset: PathBuf::new(),
            failing: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_diff(mut self, diff: &str) -> Self {
        self.diff = diff.to_string();
        self
    }

    pub fn with_offset(mut self, offset: &str) -> Self {
        self.offset = PathBuf::from(offset);
        self
    }

    /// Every path operation on `path` fails after being recorded
    pub fn failing_on(mut self, path: &str) -> Self {
        self.failing = Some(PathBuf::from(path));
        self
    }

    pub fn set_status(&self, status: &str) {
        *self.status.borrow_mut() = status.to_string();
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn fails(&self, path: &Path) -> bool {
        self.failing.as_deref() == Some(path)
    }
}

impl Vcs for RecordingVcs {
    fn status(&self) -> Result<String> {
        self.record(Call::Status);
        Ok(self.status.borrow().clone())
    }

    fn stage(&self, path: &Path) -> Result<()> {
        self.record(Call::Stage(path.to_path_buf()));
        if self.fails(path) {
            return Err(GitStagerError::stage_failed(path, "simulated failure"));
        }
        Ok(())
    }

    fn unstage(&self, path: &Path) -> Result<()> {
        self.record(Call::Unstage(path.to_path_buf()));
        if self.fails(path) {
            return Err(GitStagerError::unstage_failed(path, "simulated failure"));
        }
        Ok(())
    }

    fn diff(&self, path: &Path, staged: bool) -> Result<String> {
        self.record(Call::Diff(path.to_path_buf(), staged));
        if self.fails(path) {
            return Err(GitStagerError::diff_failed(path, "simulated failure"));
        }
        Ok(self.diff.clone())
    }

    fn open(&self, path: &Path) -> Result<()> {
        self.record(Call::Open(path.to_path_buf()));
        if self.fails(path) {
            return Err(GitStagerError::open_failed(path, "simulated failure"));
        }
        Ok(())
    }

    fn repo_root_offset(&self) -> &Path {
        &self.offset
    }
}
