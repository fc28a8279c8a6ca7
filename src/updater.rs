//! Release edits applied to a package checkout.
//!
//! Each file format has a pure editor that maps file content to updated
//! content, or to None when the expected version pattern is absent. Those
//! editors never touch the filesystem. [`edit_file`] wraps them with the
//! read/compare/write cycle, and [`manager::UpdateManager`] applies every
//! edit a package needs in order.
//!
//! Absent files and absent patterns are reported as outcomes and logged as
//! warnings; they never fail the release.
use color_eyre::eyre::Context;
use log::*;
use std::{fs, path::Path};

use crate::result::Result;

/// `# Changelog` heading insertion.
pub mod changelog;

/// SFRA markers in the storefront data library XML.
pub mod library_xml;

/// Applies all release edits to a package checkout.
pub mod manager;

/// `version` field of package.json.
pub mod package_json;

/// Version lines in `.properties` files.
pub mod properties;

/// Version files per package.
pub mod registry;

/// What happened to a single version file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// New content was written.
    Updated,
    /// The file already carried the version; nothing was written.
    Unchanged,
    /// The file exists but lacks the expected pattern.
    PatternMissing,
    /// The file does not exist.
    FileMissing,
}

/// Read `path`, run `edit` over its content and write the result back only
/// when it differs.
pub fn edit_file<F>(path: &Path, edit: F) -> Result<EditOutcome>
where
    F: FnOnce(&str) -> Result<Option<String>>,
{
    if !path.is_file() {
        warn!("{} does not exist: skipping", path.display());
        return Ok(EditOutcome::FileMissing);
    }

    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;

    let Some(updated) = edit(&content)? else {
        warn!(
            "version pattern not found in {}: leaving file untouched",
            path.display()
        );
        return Ok(EditOutcome::PatternMissing);
    };

    if updated == content {
        info!("{} is already up to date", path.display());
        return Ok(EditOutcome::Unchanged);
    }

    fs::write(path, updated)
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    info!("updated {}", path.display());

    Ok(EditOutcome::Updated)
}
