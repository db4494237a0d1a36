//! Raw API call command implementation

use super::{Command, CommandContext, validators};
use crate::output::print_response;
use anyhow::{Context, Result};
use async_trait::async_trait;
use ghub_api::{RequestOptions, Verb};
use serde_json::Value;
use tracing::info;

/// Send one request to an arbitrary API path
pub struct ApiCommand {
    pub path: String,
    pub method: String,
    pub data: Option<String>,
    pub include_headers: bool,
}

impl ApiCommand {
    /// Path with a leading slash, so it joins cleanly onto the API origin
    pub fn normalized_path(&self) -> String {
        if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        }
    }

    /// Parse `--data` as JSON
    pub fn body(&self) -> Result<Option<Value>> {
        self.data
            .as_deref()
            .map(|data| serde_json::from_str(data).context("--data is not valid JSON"))
            .transpose()
    }
}

#[async_trait]
impl Command for ApiCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        validators::validate_api_path(&self.path)?;
        let body = self.body()?;
        let verb = Verb::from(self.method.as_str());
        let path = self.normalized_path();

        info!(%verb, %path, "sending API request");
        let response = context
            .github
            .dispatch(&path, verb, body, RequestOptions::default())
            .await?;

        print_response(&response, self.include_headers)
    }
}
