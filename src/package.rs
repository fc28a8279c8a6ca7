//! Package descriptors and release version naming.
use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::{config::Config, path_helpers::package_path};

/// Package that ships its version in templated resources rather than a
/// cartridge named after the package.
pub const STOREFRONT_PACKAGE: &str = "storefront-reference-architecture";

/// Package that carries the shared library XML data file.
pub const STOREFRONT_DATA_PACKAGE: &str = "storefrontdata";

/// Release version exactly as given on the command line.
///
/// No semver validation is performed. A leading `v` is kept in branch
/// names, tags and commit messages and stripped for file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// The version as given, e.g. `v2.0.0`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The version without its leading `v`, e.g. `2.0.0`.
    pub fn number(&self) -> &str {
        self.0.strip_prefix('v').unwrap_or(&self.0)
    }

    pub fn release_branch(&self) -> String {
        format!("release/{}", self.0)
    }

    pub fn commit_message(&self) -> String {
        format!("chore: release {}", self.0)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A package checkout resolved against the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub path: PathBuf,
    pub base_branch: String,
}

impl Package {
    pub fn resolve(name: &str, workspace_root: &Path, config: &Config) -> Self {
        Self {
            name: name.to_string(),
            path: package_path(workspace_root, name),
            base_branch: config.base_branch(name).to_string(),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }
}
