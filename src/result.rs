//! Result type shared by every sfra-release module.
//!
//! Errors are reported through `color-eyre`, which gives colorized reports
//! with the chain of `.wrap_err()` contexts attached as an error propagates
//! out of a package workflow. Typed failures that callers need to match on
//! live in [`crate::error::ReleaseError`] and convert into this result via
//! `?`.
//!
//! ```rust,ignore
//! use color_eyre::eyre::Context;
//! use crate::result::Result;
//!
//! fn read_manifest(path: &Path) -> Result<String> {
//!     let content = std::fs::read_to_string(path)
//!         .wrap_err_with(|| format!("failed to read {}", path.display()))?;
//!     Ok(content)
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout sfra-release.
pub type Result<T> = EyreResult<T>;
