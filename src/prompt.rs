//! Operator prompts used when a package checkout has uncommitted changes.
use dialoguer::{Confirm, Input};
use log::*;

#[cfg(test)]
use mockall::automock;

use crate::{error::ReleaseError, result::Result};

/// Fallback commit message used when prompts are answered automatically.
pub const DEFAULT_COMMIT_MESSAGE: &str = "commit changed files";

/// Source of operator answers.
#[cfg_attr(test, automock)]
pub trait Prompter {
    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str) -> Result<bool>;
    /// Ask for free text.
    fn ask(&self, prompt: &str) -> Result<String>;
}

/// Prompts on the controlling terminal.
pub struct TerminalPrompter {}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(ReleaseError::from)?;
        Ok(answer)
    }

    fn ask(&self, prompt: &str) -> Result<String> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(ReleaseError::from)?;
        Ok(answer.trim().to_string())
    }
}

/// Answers every prompt without operator input.
pub struct AutoPrompter {
    message: String,
}

impl AutoPrompter {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for AutoPrompter {
    fn default() -> Self {
        Self::new(DEFAULT_COMMIT_MESSAGE)
    }
}

impl Prompter for AutoPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        debug!("auto-confirming: {prompt}");
        Ok(true)
    }

    fn ask(&self, prompt: &str) -> Result<String> {
        debug!("auto-answering '{prompt}' with: {}", self.message);
        Ok(self.message.clone())
    }
}
