//! Implements the Forge trait for GitHub using the `gh` CLI
use log::*;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::{
    forge::{
        traits::Forge,
        types::{CreatePrRequest, GetPrRequest},
    },
    result::Result,
    runner::{Cmd, CommandRunner},
};

/// Extract a PR number from `gh pr create` output. The number following
/// `/pull/` wins; otherwise the first run of digits is used.
///
/// Taking the first run of digits alone would pick up digits in the owner
/// or repository name (`https://github.com/org2024/...`). For URLs without
/// digits before `/pull/` both rules give the same number.
pub fn extract_pr_number(output: &str) -> Result<Option<u64>> {
    let pull_regex = Regex::new(r"/pull/(\d+)")?;

    if let Some(caps) = pull_regex.captures(output)
        && let Ok(number) = caps[1].parse::<u64>()
    {
        return Ok(Some(number));
    }

    let digits_regex = Regex::new(r"\d+")?;

    Ok(digits_regex
        .find(output)
        .and_then(|m| m.as_str().parse::<u64>().ok()))
}

/// GitHub forge backed by the `gh` CLI running inside a package checkout.
pub struct Github<'r> {
    runner: &'r dyn CommandRunner,
    path: PathBuf,
    owner: String,
    repo: String,
}

impl<'r> Github<'r> {
    pub fn new(
        runner: &'r dyn CommandRunner,
        path: &Path,
        owner: &str,
        repo: &str,
    ) -> Self {
        Self {
            runner,
            path: path.to_path_buf(),
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }
}

impl Forge for Github<'_> {
    fn has_open_pr(&self, req: &GetPrRequest) -> Result<bool> {
        info!(
            "checking open PRs: gh pr list --state open --base {}",
            req.base_branch
        );

        let cmd = Cmd::new(
            "gh",
            [
                "pr",
                "list",
                "--state",
                "open",
                "--base",
                req.base_branch.as_str(),
            ],
            &self.path,
        );
        let output = self.runner.run_checked(&cmd)?;

        Ok(output.stdout.contains(&req.head_branch))
    }

    fn create_pr(&self, req: &CreatePrRequest) -> Result<Option<u64>> {
        info!(
            "creating PR for {}: gh pr create --fill --base {}",
            req.head_branch, req.base_branch
        );

        let cmd = Cmd::new(
            "gh",
            ["pr", "create", "--fill", "--base", req.base_branch.as_str()],
            &self.path,
        );
        let output = self.runner.run_checked(&cmd)?;

        extract_pr_number(&output.stdout)
    }

    fn pr_url(&self, number: u64) -> String {
        format!(
            "https://github.com/{}/{}/pull/{number}",
            self.owner, self.repo
        )
    }
}
