//! Typed errors for failures the workflows and `main` need to tell apart.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for sfra-release operations.
#[derive(Error, Debug)]
pub enum ReleaseError {
    // Filesystem layout errors
    #[error(
        "Unable to resolve workspace root: no 'sfra-release' path component in {}",
        path.display()
    )]
    WorkspaceRootNotFound { path: PathBuf },

    // Subprocess errors
    #[error("Command failed ({code}): {command}\n{stderr}")]
    CommandFailed {
        command: String,
        code: String,
        stderr: String,
    },

    #[error("Unable to execute command: {command}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Required executable not found on PATH: {0}")]
    MissingTool(String),

    // Operator interaction
    #[error("Aborted by operator: working tree has uncommitted changes")]
    Aborted,

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl ReleaseError {
    /// Create a command failure error from a rendered command line
    pub fn command_failed(
        command: impl Into<String>,
        code: Option<i32>,
        stderr: impl Into<String>,
    ) -> Self {
        let code = code
            .map(|c| format!("exit code {c}"))
            .unwrap_or_else(|| "terminated by signal".into());

        Self::CommandFailed {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    /// Returns true when this error represents an operator abort
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

impl From<dialoguer::Error> for ReleaseError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}
