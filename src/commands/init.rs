//! Init command implementation

use super::{Command, CommandContext};
use crate::config::CONFIG_TEMPLATE;
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use std::path::Path;

/// Write a commented starter config file
pub struct InitCommand {
    pub output: String,
    pub overwrite: bool,
}

#[async_trait]
impl Command for InitCommand {
    async fn execute(&self, _context: &CommandContext) -> Result<()> {
        if Path::new(&self.output).exists() && !self.overwrite {
            anyhow::bail!(
                "File '{}' already exists. Use --overwrite to replace it.",
                self.output
            );
        }

        std::fs::write(&self.output, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write '{}'", self.output))?;

        println!(
            "{}",
            format!("Wrote configuration template to {}", self.output).green()
        );
        Ok(())
    }
}
