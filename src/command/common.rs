//! Common functionality shared between release commands
use chrono::NaiveDate;
use log::*;
use std::path::PathBuf;

use crate::{
    config::Config,
    error::ReleaseError,
    package::Package,
    prompt::Prompter,
    repo::Repository,
    result::Result,
    runner::CommandRunner,
};

/// Everything a workflow needs besides the version and package list.
pub struct ReleaseContext<'a> {
    pub runner: &'a dyn CommandRunner,
    pub prompter: &'a dyn Prompter,
    pub config: &'a Config,
    pub workspace_root: PathBuf,
    /// Date used for changelog headings.
    pub today: NaiveDate,
}

impl ReleaseContext<'_> {
    /// Resolve a package, returning None (with a warning) when its checkout
    /// is missing.
    pub fn resolve_package(&self, name: &str) -> Option<Package> {
        let package = Package::resolve(name, &self.workspace_root, self.config);

        if !package.exists() {
            warn!(
                "package directory {} does not exist: skipping {name}",
                package.path.display()
            );
            return None;
        }

        Some(package)
    }
}

/// How the guard obtains permission and a message to commit dirty files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardMode<'m> {
    /// Ask the operator; declining aborts the run.
    Interactive,
    /// Commit with the given message without asking.
    Unattended(&'m str),
}

/// Commit any uncommitted changes so the next step starts from a clean
/// tree. Files are staged one by one from the porcelain status.
pub fn check_for_changes(
    repo: &Repository,
    prompter: &dyn Prompter,
    mode: GuardMode,
) -> Result<()> {
    debug!("checking for changes in {}", repo.path().display());

    let changed = repo.changed_files()?;

    if changed.is_empty() {
        return Ok(());
    }

    warn!("you have uncommitted changes:");
    for file in changed.iter() {
        warn!("  {} {}", file.status, file.path);
    }

    let message = match mode {
        GuardMode::Interactive => {
            if !prompter.confirm("Do you want to commit these changes?")? {
                return Err(ReleaseError::Aborted.into());
            }
            prompter.ask("Enter commit message")?
        }
        GuardMode::Unattended(message) => message.to_string(),
    };

    for file in changed.iter() {
        repo.add(&file.path)?;
    }

    repo.commit(&message)
}

/// Fail early when an external executable the workflow relies on is not
/// installed.
pub fn preflight(tools: &[&str]) -> Result<()> {
    for tool in tools {
        match which::which(tool) {
            Ok(path) => debug!("found {tool}: {}", path.display()),
            Err(_) => {
                return Err(ReleaseError::MissingTool(tool.to_string()).into());
            }
        }
    }

    Ok(())
}

/// Log a section banner.
pub fn banner(title: &str) {
    info!("======================= {title} =======================");
}
