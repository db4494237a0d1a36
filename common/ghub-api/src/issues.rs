//! GitHub Issues API operations

use crate::dispatcher::Dispatcher;
use crate::encode::{repo_path, with_query};
use crate::error::Result;
use crate::request::{RequestOptions, Verb};
use crate::response::Response;
use crate::types::{IssueUpdate, NewIssue};
use serde_json::json;
use std::sync::Arc;

/// Issues sub-client, obtained from [`GitHub::issues`](crate::GitHub::issues)
#[derive(Debug)]
pub struct Issues {
    dispatcher: Arc<Dispatcher>,
}

impl Issues {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// List issues for a repository, optionally filtered by state
    /// ("open", "closed", "all")
    pub async fn list(&self, owner: &str, repo: &str, state: Option<&str>) -> Result<Response> {
        let mut path = format!("{}/issues", repo_path(owner, repo));
        if let Some(state) = state {
            path = with_query(path, "state", state);
        }
        self.call(&path, Verb::Get, None).await
    }

    pub async fn get(&self, owner: &str, repo: &str, number: u64) -> Result<Response> {
        let path = format!("{}/issues/{}", repo_path(owner, repo), number);
        self.call(&path, Verb::Get, None).await
    }

    pub async fn create(&self, owner: &str, repo: &str, issue: &NewIssue) -> Result<Response> {
        let path = format!("{}/issues", repo_path(owner, repo));
        let body = serde_json::to_value(issue)?;
        self.call(&path, Verb::Post, Some(body)).await
    }

    pub async fn edit(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        update: &IssueUpdate,
    ) -> Result<Response> {
        let path = format!("{}/issues/{}", repo_path(owner, repo), number);
        let body = serde_json::to_value(update)?;
        self.call(&path, Verb::Patch, Some(body)).await
    }

    pub async fn comments(&self, owner: &str, repo: &str, number: u64) -> Result<Response> {
        let path = format!("{}/issues/{}/comments", repo_path(owner, repo), number);
        self.call(&path, Verb::Get, None).await
    }

    /// Add a comment to an issue (or pull request)
    pub async fn comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<Response> {
        let path = format!("{}/issues/{}/comments", repo_path(owner, repo), number);
        let body = json!({ "body": body });
        self.call(&path, Verb::Post, Some(body)).await
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
