pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod forge;
pub mod package;
pub mod path_helpers;
pub mod prompt;
pub mod repo;
pub mod result;
pub mod runner;
pub mod updater;

#[cfg(test)]
pub mod test_helpers;
