//! Applies every release edit a package needs, in workflow order.
use chrono::NaiveDate;
use color_eyre::eyre::{Context, eyre};
use log::*;
use std::{fs, path::Path};

use crate::{
    package::{Package, ReleaseVersion},
    result::Result,
    runner::{Cmd, CommandRunner},
    updater::{
        EditOutcome,
        changelog::{self, ChangelogUpdate},
        edit_file, package_json, registry,
    },
};

pub const MANIFEST_FILE: &str = "package.json";
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

pub struct UpdateManager<'r> {
    runner: &'r dyn CommandRunner,
    install_command: &'r [String],
}

impl<'r> UpdateManager<'r> {
    pub fn new(
        runner: &'r dyn CommandRunner,
        install_command: &'r [String],
    ) -> Self {
        Self {
            runner,
            install_command,
        }
    }

    /// Run the dependency install command in the package directory.
    pub fn install_dependencies(&self, package_root: &Path) -> Result<()> {
        let (program, args) = self
            .install_command
            .split_first()
            .ok_or_else(|| eyre!("install_command must name a program"))?;

        let cmd =
            Cmd::new(program, args.iter().map(String::as_str), package_root)
                .streamed();
        info!("running {}", cmd.line());
        self.runner.run_checked(&cmd)?;

        Ok(())
    }

    /// Update properties files, the storefront data library and package.json
    /// for a release. The lockfile is refreshed when package.json exists.
    pub fn apply_release_edits(
        &self,
        package: &Package,
        version: &ReleaseVersion,
    ) -> Result<Vec<EditOutcome>> {
        let mut outcomes = vec![];

        for edit in registry::edits_for(&package.name) {
            info!("updating {:?}: {}", edit.role, edit.path.display());
            outcomes.push(edit.apply(&package.path, version.number())?);
        }

        outcomes.push(self.update_manifest(&package.path, version)?);

        Ok(outcomes)
    }

    /// Set package.json's version and refresh the lockfile.
    pub fn update_manifest(
        &self,
        package_root: &Path,
        version: &ReleaseVersion,
    ) -> Result<EditOutcome> {
        info!("updating {MANIFEST_FILE}");

        let outcome = edit_file(&package_root.join(MANIFEST_FILE), |content| {
            package_json::update_version(content, version.number())
        })?;

        if outcome != EditOutcome::FileMissing {
            self.install_dependencies(package_root)?;
        }

        Ok(outcome)
    }
}

/// Insert a dated heading for the manifest's version into CHANGELOG.md.
///
/// The version comes from package.json, which has already been bumped by
/// the time this runs.
pub fn update_changelog(
    package_root: &Path,
    date: NaiveDate,
) -> Result<EditOutcome> {
    info!("updating changelog");

    let manifest_path = package_root.join(MANIFEST_FILE);

    if !manifest_path.is_file() {
        warn!(
            "{} does not exist: unable to determine changelog version",
            manifest_path.display()
        );
        return Ok(EditOutcome::FileMissing);
    }

    let manifest = fs::read_to_string(&manifest_path).wrap_err_with(|| {
        format!("failed to read {}", manifest_path.display())
    })?;

    let Some(version) = package_json::read_version(&manifest)? else {
        warn!("{} has no version field", manifest_path.display());
        return Ok(EditOutcome::PatternMissing);
    };

    let changelog_path = package_root.join(CHANGELOG_FILE);

    if !changelog_path.is_file() {
        warn!("no {CHANGELOG_FILE} file found: skipping");
        return Ok(EditOutcome::FileMissing);
    }

    let content = fs::read_to_string(&changelog_path).wrap_err_with(|| {
        format!("failed to read {}", changelog_path.display())
    })?;

    let heading = changelog::release_heading(&version, date);

    match changelog::prepend_release(&content, &version, &heading) {
        ChangelogUpdate::AlreadyPresent => {
            info!("changelog already updated with version {version}: skipping");
            Ok(EditOutcome::Unchanged)
        }
        ChangelogUpdate::MissingTitle => {
            warn!(
                "{} has no '{}' title: leaving file untouched",
                changelog_path.display(),
                changelog::CHANGELOG_TITLE
            );
            Ok(EditOutcome::PatternMissing)
        }
        ChangelogUpdate::Updated(updated) => {
            fs::write(&changelog_path, updated).wrap_err_with(|| {
                format!("failed to write {}", changelog_path.display())
            })?;
            info!("changelog updated: {heading}");
            Ok(EditOutcome::Updated)
        }
    }
}
