//! Base types and traits for the command pattern

use crate::config::Config;
use anyhow::{Context, Result};
use ghub_api::GitHub;

/// Context passed to all commands containing the configuration and client
pub struct CommandContext {
    /// The merged configuration (file, environment, flags)
    pub config: Config,
    /// Client built from `config`
    pub github: GitHub,
}

impl CommandContext {
    /// Build the GitHub client for a configuration
    pub fn new(config: Config) -> Result<Self> {
        let github =
            GitHub::new(config.to_client_options()).context("Failed to create GitHub client")?;
        Ok(Self { config, github })
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
