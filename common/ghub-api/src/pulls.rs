//! GitHub Pull Request API operations
//!
//! This module contains the pull requests sub-client, covering creation,
//! listing, editing and merging of pull requests.

use crate::dispatcher::Dispatcher;
use crate::encode::{repo_path, with_query};
use crate::error::Result;
use crate::request::{RequestOptions, Verb};
use crate::response::Response;
use crate::types::{NewPullRequest, PullRequestUpdate};
use std::sync::Arc;

/// Pull requests sub-client, obtained from [`GitHub::pulls`](crate::GitHub::pulls)
#[derive(Debug)]
pub struct Pulls {
    dispatcher: Arc<Dispatcher>,
}

impl Pulls {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// List pull requests for a repository
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    /// * `state` - Optional state filter ("open", "closed", "all")
    pub async fn list(&self, owner: &str, repo: &str, state: Option<&str>) -> Result<Response> {
        let mut path = format!("{}/pulls", repo_path(owner, repo));
        if let Some(state) = state {
            path = with_query(path, "state", state);
        }
        self.call(&path, Verb::Get, None).await
    }

    /// Get a specific pull request by number
    pub async fn get(&self, owner: &str, repo: &str, number: u64) -> Result<Response> {
        let path = format!("{}/pulls/{}", repo_path(owner, repo), number);
        self.call(&path, Verb::Get, None).await
    }

    /// Create a new pull request
    ///
    /// # Example
    /// ```rust,no_run
    /// use ghub_api::{ClientOptions, GitHub, NewPullRequest};
    ///
    /// # async fn example() -> ghub_api::Result<()> {
    /// let github = GitHub::new(ClientOptions::new().with_token("github_token"))?;
    /// let pr = NewPullRequest::new("Fix bug in authentication", "feature-branch", "main")
    ///     .with_body("This PR fixes a critical bug in the auth system");
    ///
    /// let response = github.pulls().create("owner", "repo", &pr).await?;
    /// println!("Created PR: {}", response.body()["html_url"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, owner: &str, repo: &str, pr: &NewPullRequest) -> Result<Response> {
        let path = format!("{}/pulls", repo_path(owner, repo));
        let body = serde_json::to_value(pr)?;
        self.call(&path, Verb::Post, Some(body)).await
    }

    /// Update title, body, state or base branch
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        update: &PullRequestUpdate,
    ) -> Result<Response> {
        let path = format!("{}/pulls/{}", repo_path(owner, repo), number);
        let body = serde_json::to_value(update)?;
        self.call(&path, Verb::Patch, Some(body)).await
    }

    /// List files changed by a pull request
    pub async fn files(&self, owner: &str, repo: &str, number: u64) -> Result<Response> {
        let path = format!("{}/pulls/{}/files", repo_path(owner, repo), number);
        self.call(&path, Verb::Get, None).await
    }

    /// Check whether a pull request has been merged: 204 if merged, 404 if not
    pub async fn is_merged(&self, owner: &str, repo: &str, number: u64) -> Result<Response> {
        let path = format!("{}/pulls/{}/merge", repo_path(owner, repo), number);
        self.call(&path, Verb::Get, None).await
    }

    /// Merge a pull request
    ///
    /// PUT requests carry no payload, so GitHub applies its default merge
    /// method and commit message.
    pub async fn merge(&self, owner: &str, repo: &str, number: u64) -> Result<Response> {
        let path = format!("{}/pulls/{}/merge", repo_path(owner, repo), number);
        self.call(&path, Verb::Put, None).await
    }

    async fn call(
        &self,
        path: &str,
        verb: Verb,
        body: Option<serde_json::Value>,
    ) -> Result<Response> {
        self.dispatcher
            .dispatch(path, verb, body, RequestOptions::default())
            .await
    }
}
