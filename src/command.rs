//! Command execution and orchestration for sfra-release.
//!
//! Each action selected on the command line maps to one module here. Both
//! walk the requested packages strictly in order; a package whose checkout
//! is missing is skipped with a warning, while any failing subprocess stops
//! the whole run.
//!
//! # Command Workflow
//!
//! ## Release PR (`createPR`)
//!
//! 1. **Sync**: commit stray changes, switch to the base branch and pull
//! 2. **Branch**: switch to `release/<version>`, creating it if needed
//! 3. **Install**: refresh dependencies and commit any fallout
//! 4. **Edit**: bump properties files, data library, package.json and the
//!    changelog
//! 5. **Publish**: commit as `chore: release <version>`, push and open a PR
//!    unless one is already open
//!
//! ## Git Tag (`createGitTag`)
//!
//! 1. **Sync**: switch to the base branch and pull
//! 2. **Tag**: create the version tag unless it already exists
//! 3. **Push**: push the tag ref to the remote

/// Context and helpers shared by both workflows, including the
/// uncommitted-changes guard.
pub mod common;

/// Tag the base branch head of every package.
pub mod git_tag;

/// Prepare release branches and open release pull requests.
pub mod release_pr;
