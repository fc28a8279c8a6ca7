//! Resolution of the workspace that holds every package checkout.
//!
//! The tool lives inside a checkout named `sfra-release`; every package
//! repository is a sibling of that checkout.
use std::{
    env,
    path::{Component, Path, PathBuf},
};

use crate::{error::ReleaseError, result::Result};

/// Path component that marks the tool's own checkout.
pub const TOOL_DIR_NAME: &str = "sfra-release";

/// Returns everything before the first path component literally named
/// [`TOOL_DIR_NAME`].
pub fn workspace_root_from(tool_dir: &Path) -> Result<PathBuf> {
    let mut root = PathBuf::new();

    for component in tool_dir.components() {
        if let Component::Normal(name) = component
            && name == TOOL_DIR_NAME
        {
            return Ok(root);
        }
        root.push(component);
    }

    Err(ReleaseError::WorkspaceRootNotFound {
        path: tool_dir.to_path_buf(),
    }
    .into())
}

/// Resolve the workspace root from the location of the running executable.
pub fn workspace_root() -> Result<PathBuf> {
    let exe = env::current_exe()?;
    let tool_dir = exe.parent().unwrap_or(&exe);
    workspace_root_from(tool_dir)
}

/// Directory of a package checkout inside the workspace.
pub fn package_path(workspace_root: &Path, package_name: &str) -> PathBuf {
    workspace_root.join(package_name)
}
