//! CLI argument parsing.
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Invocation examples shown after a usage error.
pub const USAGE_EXAMPLES: &str = "\
examples:
  sfra-release v7.1.0 createPR
  sfra-release v7.1.0 createPR storefront-reference-architecture
  sfra-release v7.1.0 createGitTag plugin_wishlists plugin_giftregistry";

/// Release actions.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Prepare release branches, bump versions and open release PRs.
    #[value(name = "createPR")]
    CreatePr,

    /// Tag the base branch head with the release version and push the tag.
    #[value(name = "createGitTag")]
    CreateGitTag,
}

/// Release automation for SFRA packages.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Release version, e.g. v7.1.0.
    #[arg(id = "release_version", value_name = "VERSION")]
    pub version: String,

    /// Action to perform.
    pub action: Action,

    /// Packages to release. Defaults to the configured package list.
    pub packages: Vec<String>,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,

    #[arg(long, short = 'y', default_value_t = false)]
    /// Commit uncommitted changes without prompting.
    pub yes: bool,

    #[arg(long)]
    /// Path to a configuration file. Defaults to ./sfra-release.toml.
    pub config: Option<PathBuf>,

    #[arg(long)]
    /// Directory containing the package checkouts. Defaults to the parent of
    /// the sfra-release directory.
    pub workspace_root: Option<PathBuf>,
}

impl Args {
    /// Packages named on the command line, or `defaults` when none were
    /// given.
    pub fn packages_or(&self, defaults: &[String]) -> Vec<String> {
        if self.packages.is_empty() {
            return defaults.to_vec();
        }

        self.packages.clone()
    }
}
