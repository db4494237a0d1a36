//! ghub - A command-line client for the GitHub REST API

pub mod commands;
pub mod config;
pub mod constants;
pub mod logging;
pub mod output;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{Config, CredentialOverrides};

