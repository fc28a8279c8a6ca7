//! Release tag command implementation.
use log::*;

use crate::{
    command::common::{self, ReleaseContext},
    package::{Package, ReleaseVersion},
    repo::Repository,
    result::Result,
};

/// Tag the head of each package's base branch with the release version and
/// push the tag.
pub fn execute(
    ctx: &ReleaseContext,
    version: &ReleaseVersion,
    packages: &[String],
) -> Result<()> {
    for name in packages.iter() {
        common::banner(&format!("Processing package: {name}"));
        info!("creating git tag {version}");

        let Some(package) = ctx.resolve_package(name) else {
            continue;
        };

        tag_package(ctx, &package, version)?;
    }

    Ok(())
}

fn tag_package(
    ctx: &ReleaseContext,
    package: &Package,
    version: &ReleaseVersion,
) -> Result<()> {
    let repo = Repository::new(ctx.runner, &package.path);
    let tag = version.as_str();

    repo.switch_branch(&package.base_branch)?;
    repo.pull()?;

    if repo.tags()?.iter().any(|t| t == tag) {
        info!("tag {tag} already exists: skipping tag creation");
    } else {
        repo.create_tag(tag)?;
    }

    // pushed even when the tag already existed locally
    repo.push_tag(&ctx.config.remote, tag)
}
