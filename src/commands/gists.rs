//! Gists command implementation

use super::{Command, CommandContext, validators};
use crate::output::print_response;
use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;

#[derive(Debug, Clone, Subcommand)]
pub enum GistsAction {
    /// List gists (yours, or a user's public gists)
    List {
        /// List this user's public gists
        #[arg(long)]
        user: Option<String>,
    },
    /// Show a gist
    Get { id: String },
    /// Delete a gist
    Delete { id: String },
    /// Star a gist
    Star { id: String },
    /// Remove the star from a gist
    Unstar { id: String },
}

pub struct GistsCommand {
    pub action: GistsAction,
    pub include_headers: bool,
}

#[async_trait]
impl Command for GistsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let gists = context.github.gists();

        let response = match &self.action {
            GistsAction::List { user } => gists.list(user.as_deref()).await?,
            GistsAction::Get { id } => {
                validators::validate_gist_id(id)?;
                gists.get(id).await?
            }
            GistsAction::Delete { id } => {
                validators::validate_gist_id(id)?;
                gists.delete(id).await?
            }
            GistsAction::Star { id } => {
                validators::validate_gist_id(id)?;
                gists.star(id).await?
            }
            GistsAction::Unstar { id } => {
                validators::validate_gist_id(id)?;
                gists.unstar(id).await?
            }
        };

        print_response(&response, self.include_headers)
    }
}
