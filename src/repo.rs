//! Git operations for a single package checkout, executed through the
//! system `git` client.
//!
//! Every operation runs in the package directory the [`Repository`] was
//! created with. Failures of mutating commands are fatal; the only tolerated
//! non-zero exit is the branch existence probe.
use log::*;
use std::path::{Path, PathBuf};

use crate::{
    result::Result,
    runner::{Cmd, CommandRunner},
};

/// Width of the status code prefix in `git status --porcelain` entries.
const PORCELAIN_PREFIX_WIDTH: usize = 3;

/// A single entry from `git status --porcelain -z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// Two-column status code, e.g. ` M`, `??`, `R `.
    pub status: String,
    /// Path to stage. For renames this is the destination path.
    pub path: String,
}

/// Parse NUL-separated porcelain status output into changed files.
///
/// Paths are verbatim, never quoted. Rename and copy entries are followed by
/// an extra entry holding the source path, which is skipped.
pub fn parse_porcelain(status: &str) -> Vec<ChangedFile> {
    let mut files = vec![];
    let mut entries = status.split('\0').filter(|e| !e.is_empty());

    while let Some(entry) = entries.next() {
        let (Some(code), Some(path)) = (
            entry.get(..2),
            entry.get(PORCELAIN_PREFIX_WIDTH..),
        ) else {
            continue;
        };

        if code.contains(['R', 'C']) {
            entries.next();
        }

        files.push(ChangedFile {
            status: code.to_string(),
            path: path.to_string(),
        });
    }

    files
}

/// Git client bound to one package directory.
pub struct Repository<'r> {
    runner: &'r dyn CommandRunner,
    path: PathBuf,
}

impl<'r> Repository<'r> {
    pub fn new(runner: &'r dyn CommandRunner, path: &Path) -> Self {
        Self {
            runner,
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn git<const N: usize>(&self, args: [&str; N]) -> Cmd {
        Cmd::new("git", args, &self.path)
    }

    /// A git command whose progress is shown to the operator.
    fn git_streamed<const N: usize>(&self, args: [&str; N]) -> Cmd {
        self.git(args).streamed()
    }

    /// Files with uncommitted changes, empty when the tree is clean.
    pub fn changed_files(&self) -> Result<Vec<ChangedFile>> {
        let output = self
            .runner
            .run_checked(&self.git(["status", "--porcelain", "-z"]))?;
        Ok(parse_porcelain(&output.stdout))
    }

    pub fn switch_branch(&self, branch: &str) -> Result<()> {
        info!("switching to branch: {branch}");
        self.runner.run_checked(&self.git(["switch", branch]))?;
        Ok(())
    }

    pub fn create_branch(&self, branch: &str) -> Result<()> {
        info!("creating branch: {branch}");
        self.runner.run_checked(&self.git(["switch", "-c", branch]))?;
        Ok(())
    }

    pub fn pull(&self) -> Result<()> {
        info!("pulling latest changes");
        self.runner.run_checked(&self.git_streamed(["pull"]))?;
        Ok(())
    }

    /// Probe for a local branch. A failed verification means the branch does
    /// not exist.
    pub fn branch_exists(&self, branch: &str) -> Result<bool> {
        let output = self
            .runner
            .run(&self.git(["rev-parse", "--verify", branch]))?;
        Ok(output.success)
    }

    pub fn add(&self, path: &str) -> Result<()> {
        self.runner.run_checked(&self.git(["add", path]))?;
        Ok(())
    }

    pub fn commit(&self, message: &str) -> Result<()> {
        info!("committing: {message}");
        self.runner.run_checked(&self.git(["commit", "-m", message]))?;
        Ok(())
    }

    pub fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        info!("pushing branch: git push -u {remote} {branch}");
        self.runner.run_checked(
            &self.git_streamed(["push", "-u", remote, branch]),
        )?;
        Ok(())
    }

    /// Names of all local tags.
    pub fn tags(&self) -> Result<Vec<String>> {
        let output = self.runner.run_checked(&self.git(["tag"]))?;
        Ok(output
            .stdout
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect())
    }

    pub fn create_tag(&self, tag: &str) -> Result<()> {
        info!("creating tag: {tag}");
        self.runner.run_checked(&self.git(["tag", tag]))?;
        Ok(())
    }

    pub fn push_tag(&self, remote: &str, tag: &str) -> Result<()> {
        let tag_ref = format!("refs/tags/{tag}");
        info!("pushing tag: git push {remote} {tag_ref}");
        self.runner.run_checked(
            &self.git_streamed(["push", remote, tag_ref.as_str()]),
        )?;
        Ok(())
    }
}
