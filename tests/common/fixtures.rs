//! Predefined repository scenarios

#![allow(dead_code)]

use super::repository::*;
use git_stager::core::error::Result;

/// Scenario: "initial.txt" changed on two branches and merged, leaving `UU initial.txt`
pub fn create_merge_conflict_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    git(&repo.path, &["checkout", "-q", "-b", "theirs"])?;
    create_file(&repo.path, "initial.txt", "their change\n")?;
    git_commit_all(&repo, "Their change")?;

    git(&repo.path, &["checkout", "-q", "-"])?;
    create_file(&repo.path, "initial.txt", "our change\n")?;
    git_commit_all(&repo, "Our change")?;

    git(&repo.path, &["merge", "-q", "theirs"])?;
    Ok(repo)
}

/// Scenario: "old.txt" committed, then renamed to "new.txt" in the index
pub fn create_staged_rename_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "old.txt", "renamed content\nline 2\n")?;
    git_add(&repo.path, "old.txt")?;
    git_commit(&repo.path, "Add old.txt")?;
    git(&repo.path, &["mv", "old.txt", "new.txt"])?;

    Ok(repo)
}

/// Scenario: one staged modification, one unstaged modification, one untracked file
pub fn create_mixed_changes_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "staged.txt", "v1\n")?;
    create_file(&repo.path, "unstaged.txt", "v1\n")?;
    git_commit_all(&repo, "Initial commit")?;

    create_file(&repo.path, "staged.txt", "v2\n")?;
    git_add(&repo.path, "staged.txt")?;
    create_file(&repo.path, "unstaged.txt", "v2\n")?;
    create_file(&repo.path, "untracked.txt", "new\n")?;

    Ok(repo)
}

fn git_commit_all(repo: &TestRepo, message: &str) -> Result<()> {
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, message)
}
