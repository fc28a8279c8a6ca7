//! Single entry point for every external command (git, gh, npm).
//!
//! Commands always carry the directory they run in, so the process-wide
//! working directory is never changed.
use log::*;
use std::{
    fmt,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::{error::ReleaseError, result::Result};

/// An external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cmd {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    /// Show output on the terminal as it is produced instead of capturing
    /// it.
    pub streamed: bool,
}

impl Cmd {
    pub fn new<I, S>(program: &str, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
            streamed: false,
        }
    }

    /// Let the operator follow progress of a long-running command. Streamed
    /// commands report empty stdout and stderr.
    pub fn streamed(mut self) -> Self {
        self.streamed = true;
        self
    }

    /// Command line without the working directory, as logged and recorded.
    pub fn line(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().map(|a| {
            if a.contains(char::is_whitespace) {
                format!("\"{a}\"")
            } else {
                a.clone()
            }
        }));
        parts.join(" ")
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.line())
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CmdOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Executes external commands synchronously.
pub trait CommandRunner {
    /// Run a command to completion. A non-zero exit is not an error here;
    /// only a failure to start the program is.
    fn run(&self, cmd: &Cmd) -> Result<CmdOutput>;

    /// Run a command and treat a non-zero exit as fatal.
    fn run_checked(&self, cmd: &Cmd) -> Result<CmdOutput> {
        let output = self.run(cmd)?;

        if !output.success {
            error!("error executing command: {}", cmd.line());
            return Err(ReleaseError::command_failed(
                cmd.line(),
                output.code,
                output.stderr.trim(),
            )
            .into());
        }

        Ok(output)
    }
}

/// Runs commands with [`std::process::Command`]. Stdin is always inherited so
/// tools can prompt for credentials; output is captured unless the command
/// is streamed.
pub struct SystemRunner {}

impl SystemRunner {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &Cmd) -> Result<CmdOutput> {
        debug!("running in {}: {}", cmd.cwd.display(), cmd.line());

        let mut command = Command::new(&cmd.program);
        command
            .args(&cmd.args)
            .current_dir(&cmd.cwd)
            .stdin(Stdio::inherit());

        let spawn_error =
            |source: std::io::Error| ReleaseError::CommandSpawn {
                command: cmd.line(),
                source,
            };

        if cmd.streamed {
            let status = command
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(spawn_error)?;

            return Ok(CmdOutput {
                success: status.success(),
                code: status.code(),
                ..CmdOutput::default()
            });
        }

        let output = command.output().map_err(spawn_error)?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
            debug!("{}: {line}", cmd.program);
        }
        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            debug!("{} (stderr): {line}", cmd.program);
        }

        Ok(CmdOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout,
            stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_command_line_with_quoted_args() {
        let cmd = Cmd::new(
            "git",
            ["commit", "-m", "chore: release v1.0.0"],
            Path::new("/tmp"),
        );
        assert_eq!(cmd.line(), "git commit -m \"chore: release v1.0.0\"");
        assert_eq!(cmd.to_string(), cmd.line());
    }

    #[test]
    fn streamed_flag_does_not_change_command_line() {
        let cmd = Cmd::new("git", ["pull"], Path::new("/tmp"));
        let streamed = cmd.clone().streamed();

        assert!(!cmd.streamed);
        assert!(streamed.streamed);
        assert_eq!(streamed.line(), cmd.line());
    }

    #[test]
    fn streamed_command_reports_exit_status() {
        let tmp = tempfile::TempDir::new().unwrap();
        let runner = SystemRunner::new();

        let ok = runner
            .run(&Cmd::new("git", ["--version"], tmp.path()).streamed())
            .unwrap();
        assert!(ok.success);
        assert!(ok.stdout.is_empty());

        let failed = runner
            .run(
                &Cmd::new("git", ["rev-parse", "--verify", "nope"], tmp.path())
                    .streamed(),
            )
            .unwrap();
        assert!(!failed.success);
        assert!(failed.code.is_some());
    }

    #[test]
    fn system_runner_captures_output() {
        let tmp = tempfile::TempDir::new().unwrap();
        let runner = SystemRunner::new();
        let output = runner
            .run(&Cmd::new("git", ["--version"], tmp.path()))
            .unwrap();

        assert!(output.success);
        assert!(output.stdout.starts_with("git version"));
    }

    #[test]
    fn system_runner_reports_non_zero_exit() {
        let tmp = tempfile::TempDir::new().unwrap();
        let runner = SystemRunner::new();
        let cmd =
            Cmd::new("git", ["rev-parse", "--verify", "nope"], tmp.path());

        let output = runner.run(&cmd).unwrap();
        assert!(!output.success);

        let err = runner
            .run_checked(&cmd)
            .unwrap_err()
            .downcast::<ReleaseError>()
            .unwrap();
        assert!(matches!(err, ReleaseError::CommandFailed { .. }));
    }

    #[test]
    fn system_runner_errors_when_program_missing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let runner = SystemRunner::new();
        let err = runner
            .run(&Cmd::new("definitely-not-a-real-binary", ["x"], tmp.path()))
            .unwrap_err()
            .downcast::<ReleaseError>()
            .unwrap();
        assert!(matches!(err, ReleaseError::CommandSpawn { .. }));
    }
}
