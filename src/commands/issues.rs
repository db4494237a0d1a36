//! Issues command implementation

use super::{Command, CommandContext, validators};
use crate::output::print_response;
use crate::utils::parse_repo_slug;
use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;
use ghub_api::NewIssue;

#[derive(Debug, Clone, Subcommand)]
pub enum IssuesAction {
    /// List issues of a repository
    List {
        /// Repository as OWNER/REPO or a GitHub URL
        repo: String,
        /// Filter by state: open, closed or all
        #[arg(long)]
        state: Option<String>,
    },
    /// Show an issue
    Get { repo: String, number: u64 },
    /// Open a new issue
    Create {
        repo: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: Option<String>,
        /// Label to apply (can be specified multiple times)
        #[arg(short, long)]
        label: Vec<String>,
    },
}

pub struct IssuesCommand {
    pub action: IssuesAction,
    pub include_headers: bool,
}

#[async_trait]
impl Command for IssuesCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let issues = context.github.issues();

        let response = match &self.action {
            IssuesAction::List { repo, state } => {
                validators::validate_state(state)?;
                let (owner, name) = parse_repo_slug(repo)?;
                issues.list(&owner, &name, state.as_deref()).await?
            }
            IssuesAction::Get { repo, number } => {
                validators::validate_number(*number)?;
                let (owner, name) = parse_repo_slug(repo)?;
                issues.get(&owner, &name, *number).await?
            }
            IssuesAction::Create {
                repo,
                title,
                body,
                label,
            } => {
                validators::validate_title(title)?;
                let (owner, name) = parse_repo_slug(repo)?;
                let mut issue = NewIssue::new(title.as_str());
                issue.body = body.clone();
                issue.labels = label.clone();
                issues.create(&owner, &name, &issue).await?
            }
        };

        print_response(&response, self.include_headers)
    }
}
