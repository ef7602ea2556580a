//! Git repository operations used by the staging loop.
//!
//! The loop never talks to git directly; it goes through the [`Vcs`] trait so the
//! entry and list logic can be exercised against an in-memory double. [`GitRepo`] is
//! the real implementation: it discovers the repository with `git2` and shells out
//! to the `git` binary with structured argument lists for every mutation.
//!
//! # Public API
//! - [`Vcs`]: The collaborator interface (status, stage, unstage, diff, open)
//! - [`GitRepo`]: `git` command line implementation of [`Vcs`]

use crate::core::error::{GitStagerError, Result};
use git2::Repository;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, Output};

/// Version control operations the staging loop depends on.
///
/// Every path handed to these methods is already prefixed with
/// [`Vcs::repo_root_offset`], i.e. it is relative to the directory the tool runs in.
pub trait Vcs {
    /// Porcelain status text: one `XY path` record per line
    fn status(&self) -> Result<String>;

    /// Record the work tree state of `path` in the index
    fn stage(&self, path: &Path) -> Result<()>;

    /// Reset the index entry of `path` back to HEAD
    fn unstage(&self, path: &Path) -> Result<()>;

    /// Diff text for `path`, against HEAD when `staged` is set
    fn diff(&self, path: &Path, staged: bool) -> Result<String>;

    /// Open `path` in the user's editor
    fn open(&self, path: &Path) -> Result<()>;

    /// Relative prefix from the current directory to the work tree root
    fn repo_root_offset(&self) -> &Path;
}

pub struct GitRepo {
    repo: Repository,
    cwd: PathBuf,
    root_offset: PathBuf,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let cwd = path.as_ref().to_path_buf();
        let repo = Repository::discover(&cwd).map_err(|e| {
            log::debug!("Repository discovery failed from {}: {e}", cwd.display());
            GitStagerError::NotInGitRepo
        })?;
        let workdir = repo.workdir().ok_or(GitStagerError::BareRepository)?;
        let root_offset = relative_root_offset(&cwd, workdir);

        log::debug!(
            "Opened repository at {} (root offset '{}')",
            workdir.display(),
            root_offset.display()
        );

        Ok(GitRepo {
            repo,
            cwd,
            root_offset,
        })
    }

    pub fn get_repository(&self) -> &Repository {
        &self.repo
    }

    /// A `git` command that runs in the directory the repository was opened from
    fn git(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.current_dir(&self.cwd);
        cmd
    }

    fn run(&self, mut cmd: Command) -> Result<Output> {
        log::debug!("Running {cmd:?}");
        let output = cmd.output()?;
        if !output.status.success() {
            log::debug!("Command exited with {}", output.status);
        }
        Ok(output)
    }

    fn resolve_editor(&self) -> Result<String> {
        let mut cmd = self.git();
        cmd.args(["var", "GIT_EDITOR"]);
        let output = self.run(cmd)?;
        let editor = String::from_utf8_lossy(&output.stdout).trim().to_string();

        if output.status.success() && !editor.is_empty() {
            Ok(editor)
        } else {
            Ok("vi".to_string())
        }
    }
}

impl Vcs for GitRepo {
    fn status(&self) -> Result<String> {
        let mut cmd = self.git();
        cmd.args(["status", "--porcelain"]);
        let output = self.run(cmd)?;

        if !output.status.success() {
            return Err(GitStagerError::status_failed(failure_message(&output)));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn stage(&self, path: &Path) -> Result<()> {
        let mut cmd = self.git();
        cmd.arg("add").arg("--").arg(path);
        let output = self.run(cmd)?;

        if !output.status.success() {
            return Err(GitStagerError::stage_failed(path, failure_message(&output)));
        }

        Ok(())
    }

    fn unstage(&self, path: &Path) -> Result<()> {
        let mut cmd = self.git();
        cmd.arg("reset").arg("-q").arg("--").arg(path);
        let output = self.run(cmd)?;

        if !output.status.success() {
            return Err(GitStagerError::unstage_failed(
                path,
                failure_message(&output),
            ));
        }

        Ok(())
    }

    fn diff(&self, path: &Path, staged: bool) -> Result<String> {
        let mut cmd = self.git();
        cmd.arg("diff").arg("--color");
        if staged {
            cmd.arg("--cached");
        }
        cmd.arg("--").arg(path);
        let output = self.run(cmd)?;

        if !output.status.success() {
            return Err(GitStagerError::diff_failed(path, failure_message(&output)));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn open(&self, path: &Path) -> Result<()> {
        let editor = self.resolve_editor()?;
        log::debug!("Opening {} with '{editor}'", path.display());

        // The editor string may carry its own arguments; the path is passed
        // positionally so it never goes through shell word splitting.
        let status = Command::new("sh")
            .arg("-c")
            .arg(format!("{editor} \"$@\""))
            .arg(&editor)
            .arg(path)
            .current_dir(&self.cwd)
            .status()?;

        if !status.success() {
            return Err(GitStagerError::open_failed(
                path,
                format!("editor exited with {status}"),
            ));
        }

        Ok(())
    }

    fn repo_root_offset(&self) -> &Path {
        &self.root_offset
    }
}

/// Trimmed stderr of a failed command, or its exit status when stderr is empty
fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let message = stderr.trim();
    if message.is_empty() {
        format!("git exited with {}", output.status)
    } else {
        message.to_string()
    }
}

/// `""`, `"../"`, `"../../"`, ... climbing from `cwd` up to `workdir`.
///
/// Falls back to the absolute work tree path when `cwd` is not below it.
fn relative_root_offset(cwd: &Path, workdir: &Path) -> PathBuf {
    let cwd = cwd.canonicalize().unwrap_or_else(|_| cwd.to_path_buf());
    let workdir = workdir
        .canonicalize()
        .unwrap_or_else(|_| workdir.to_path_buf());

    match cwd.strip_prefix(&workdir) {
        Ok(below) => below
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .map(|_| Component::ParentDir)
            .collect(),
        Err(_) => workdir,
    }
}
