//! Release pull request creation command implementation.
use log::*;

use crate::{
    command::common::{self, GuardMode, ReleaseContext},
    forge::{
        github::Github,
        traits::Forge,
        types::{CreatePrRequest, GetPrRequest},
    },
    package::{Package, ReleaseVersion},
    repo::Repository,
    result::Result,
    updater::manager::{UpdateManager, update_changelog},
};

/// Prepare a release branch and PR for each package, then print the URL of
/// every PR created, in package order.
pub fn execute(
    ctx: &ReleaseContext,
    version: &ReleaseVersion,
    packages: &[String],
) -> Result<Vec<String>> {
    common::banner("PR Creation Step");
    info!("version: {version}");
    info!("packages: {}", packages.join(", "));

    let mut created_prs = vec![];

    for name in packages.iter() {
        common::banner(&format!("Processing package: {name}"));

        let Some(package) = ctx.resolve_package(name) else {
            continue;
        };

        if let Some(url) = release_package(ctx, &package, version)? {
            created_prs.push(url);
        }
    }

    if !created_prs.is_empty() {
        info!("list of PRs created:");
    }

    for url in created_prs.iter() {
        println!("{url}");
    }

    Ok(created_prs)
}

/// Run the release branch workflow for one package, returning the URL of a
/// newly created PR.
fn release_package(
    ctx: &ReleaseContext,
    package: &Package,
    version: &ReleaseVersion,
) -> Result<Option<String>> {
    let repo = Repository::new(ctx.runner, &package.path);
    let updater = UpdateManager::new(ctx.runner, &ctx.config.install_command);
    let release_branch = version.release_branch();

    info!("switching to {} branch", package.base_branch);
    common::check_for_changes(&repo, ctx.prompter, GuardMode::Interactive)?;
    repo.switch_branch(&package.base_branch)?;
    repo.pull()?;
    common::check_for_changes(&repo, ctx.prompter, GuardMode::Interactive)?;

    info!("switching to release branch");
    if repo.branch_exists(&release_branch)? {
        repo.switch_branch(&release_branch)?;
    } else {
        repo.create_branch(&release_branch)?;
    }

    updater.install_dependencies(&package.path)?;
    common::check_for_changes(&repo, ctx.prompter, GuardMode::Interactive)?;

    updater.apply_release_edits(package, version)?;
    update_changelog(&package.path, ctx.today)?;

    let commit_message = version.commit_message();
    common::check_for_changes(
        &repo,
        ctx.prompter,
        GuardMode::Unattended(&commit_message),
    )?;

    repo.push_branch(&ctx.config.remote, &release_branch)?;

    let forge =
        Github::new(ctx.runner, &package.path, &ctx.config.org, &package.name);

    open_release_pr(&forge, &package.base_branch, &release_branch)
}

/// Open a PR from `release_branch` into `base_branch` unless one is already
/// open. Returns the new PR's URL.
pub fn open_release_pr(
    forge: &dyn Forge,
    base_branch: &str,
    release_branch: &str,
) -> Result<Option<String>> {
    let exists = forge.has_open_pr(&GetPrRequest {
        head_branch: release_branch.to_string(),
        base_branch: base_branch.to_string(),
    })?;

    if exists {
        info!("PR for {release_branch} already exists: skipping PR creation");
        return Ok(None);
    }

    let number = forge.create_pr(&CreatePrRequest {
        head_branch: release_branch.to_string(),
        base_branch: base_branch.to_string(),
    })?;

    match number {
        Some(number) => {
            let url = forge.pr_url(number);
            info!("created release PR: {url}");
            Ok(Some(url))
        }
        None => {
            error!("failed to create PR: no PR number found");
            Ok(None)
        }
    }
}
