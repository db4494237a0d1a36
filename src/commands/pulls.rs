//! Pull request command implementation

use super::{Command, CommandContext, validators};
use crate::output::print_response;
use crate::utils::parse_repo_slug;
use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;
use colored::*;

#[derive(Debug, Clone, Subcommand)]
pub enum PullsAction {
    /// List pull requests of a repository
    List {
        /// Repository as OWNER/REPO or a GitHub URL
        repo: String,
        /// Filter by state: open, closed or all
        #[arg(long)]
        state: Option<String>,
    },
    /// Show a pull request
    Get { repo: String, number: u64 },
    /// Merge a pull request with the repository's default merge method
    Merge { repo: String, number: u64 },
}

pub struct PullsCommand {
    pub action: PullsAction,
    pub include_headers: bool,
}

#[async_trait]
impl Command for PullsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let pulls = context.github.pulls();

        let response = match &self.action {
            PullsAction::List { repo, state } => {
                validators::validate_state(state)?;
                let (owner, name) = parse_repo_slug(repo)?;
                pulls.list(&owner, &name, state.as_deref()).await?
            }
            PullsAction::Get { repo, number } => {
                validators::validate_number(*number)?;
                let (owner, name) = parse_repo_slug(repo)?;
                pulls.get(&owner, &name, *number).await?
            }
            PullsAction::Merge { repo, number } => {
                validators::validate_number(*number)?;
                let (owner, name) = parse_repo_slug(repo)?;
                let response = pulls.merge(&owner, &name, *number).await?;
                if response.is_success() {
                    eprintln!(
                        "{} | {}",
                        format!("{}/{}#{}", owner, name, number).cyan().bold(),
                        "Pull request merged".green()
                    );
                }
                response
            }
        };

        print_response(&response, self.include_headers)
    }
}
