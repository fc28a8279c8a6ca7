//! Configuration loading and parsing for `sfra-release.toml` files.
//!
//! Every field is optional; a missing file yields the built-in defaults that
//! describe the SFRA package family.
use color_eyre::eyre::Context;
use log::*;
use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::Path};

use crate::result::Result;

/// Default configuration filename, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "sfra-release.toml";

/// GitHub organisation that owns every package repository.
pub const DEFAULT_ORG: &str = "SalesforceCommerceCloud";

/// Remote that release branches and tags are pushed to.
pub const DEFAULT_REMOTE: &str = "origin";

/// Base branch for packages without an explicit override.
pub const DEFAULT_BRANCH: &str = "master";

/// Packages processed when none are named on the command line.
pub const DEFAULT_PACKAGES: [&str; 12] = [
    "lib_productlist",
    "plugin-applepay",
    "plugin_cartridge_merge",
    "plugin_datadownload",
    "plugin_giftregistry",
    "plugin_instorepickup",
    "plugin_ordermanagement",
    "plugin_productcompare",
    "plugin_sitemap",
    "plugin_wishlists",
    "storefrontdata",
    "storefront-reference-architecture",
];

fn default_branches() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "storefront-reference-architecture".to_string(),
            "integration".to_string(),
        ),
        ("plugin-slas".to_string(), "main".to_string()),
    ])
}

/// Root configuration structure for `sfra-release.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub organisation used to build pull request URLs.
    pub org: String,
    /// Remote name used for pushes.
    pub remote: String,
    /// Base branch used when a package has no entry in `branches`.
    pub default_branch: String,
    /// Per-package base branch overrides.
    pub branches: BTreeMap<String, String>,
    /// Package list used when the command line names none.
    pub packages: Vec<String>,
    /// Dependency install command, program followed by its arguments.
    pub install_command: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            org: DEFAULT_ORG.into(),
            remote: DEFAULT_REMOTE.into(),
            default_branch: DEFAULT_BRANCH.into(),
            branches: default_branches(),
            packages: DEFAULT_PACKAGES.iter().map(|p| p.to_string()).collect(),
            install_command: vec!["npm".into(), "install".into()],
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, or from
    /// [`DEFAULT_CONFIG_FILE`] when it exists, falling back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);

        if default_path.exists() {
            return Self::from_file(default_path);
        }

        debug!("configuration not found: using defaults");
        Ok(Self::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        info!("loading configuration: {}", path.display());
        let content = fs::read_to_string(path).wrap_err_with(|| {
            format!("failed to read config file {}", path.display())
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).wrap_err("failed to parse configuration")?;
        Ok(config)
    }

    /// Base branch a release branch is cut from and its PR targets.
    pub fn base_branch(&self, package_name: &str) -> &str {
        self.branches
            .get(package_name)
            .map(String::as_str)
            .unwrap_or(&self.default_branch)
    }
}
