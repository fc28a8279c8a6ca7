//! Traits related to the code hosting forge
#[cfg(test)]
use mockall::automock;

use crate::{
    forge::types::{CreatePrRequest, GetPrRequest},
    result::Result,
};

#[cfg_attr(test, automock)]
pub trait Forge {
    /// True when an open PR against the base branch already references the
    /// head branch.
    fn has_open_pr(&self, req: &GetPrRequest) -> Result<bool>;
    /// Open a PR and return its number, or None when the forge output did
    /// not contain one.
    fn create_pr(&self, req: &CreatePrRequest) -> Result<Option<u64>>;
    /// Canonical web URL of a PR.
    fn pr_url(&self, number: u64) -> String;
}
