//! Common test helper functions shared across test modules.
//!
//! [`FakeRunner`] stands in for git, gh and npm: it records every command
//! it is asked to run and answers with scripted output, so workflows can be
//! asserted as command sequences.
use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    fs,
    path::Path,
};

use crate::{
    result::Result,
    runner::{Cmd, CmdOutput, CommandRunner},
};

/// Recording command runner with scripted responses.
///
/// Responses are keyed by the rendered command line. Several responses for
/// the same line are returned in order and the last one repeats. Unscripted
/// commands succeed with empty output.
#[derive(Default)]
pub struct FakeRunner {
    responses: RefCell<HashMap<String, VecDeque<CmdOutput>>>,
    invocations: RefCell<Vec<Cmd>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for a command line.
    pub fn respond(&self, line: &str, output: CmdOutput) {
        self.responses
            .borrow_mut()
            .entry(line.to_string())
            .or_default()
            .push_back(output);
    }

    /// Every command run so far.
    pub fn invocations(&self) -> Vec<Cmd> {
        self.invocations.borrow().clone()
    }

    /// Rendered command lines run so far.
    pub fn commands(&self) -> Vec<String> {
        self.invocations.borrow().iter().map(Cmd::line).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, cmd: &Cmd) -> Result<CmdOutput> {
        self.invocations.borrow_mut().push(cmd.clone());

        let mut responses = self.responses.borrow_mut();

        let output = match responses.get_mut(&cmd.line()) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };

        Ok(output.unwrap_or_else(|| CmdOutput::ok("")))
    }
}

/// Create a package checkout layout with the given files.
pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Read a file relative to a package root.
pub fn read_file(root: &Path, path: &str) -> String {
    fs::read_to_string(root.join(path)).unwrap()
}
