//! Pull request operations against the code host, performed through the
//! GitHub CLI.

/// `gh` CLI implementation of the forge trait.
pub mod github;

/// Common traits for forge abstraction.
pub mod traits;

/// Request types for pull request operations.
pub mod types;
