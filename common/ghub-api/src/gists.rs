//! GitHub Gists API operations
//!
//! This module contains the gists sub-client. Every method builds a path and
//! an optional JSON payload and hands them to the shared [`Dispatcher`];
//! interpreting the returned [`Response`] is left to the caller.

use crate::dispatcher::Dispatcher;
use crate::encode::segment;
use crate::error::Result;
use crate::request::{RequestOptions, Verb};
use crate::response::Response;
use crate::types::{GistUpdate, NewGist};
use std::sync::Arc;

/// Gists sub-client, obtained from [`GitHub::gists`](crate::GitHub::gists)
#[derive(Debug)]
pub struct Gists {
    dispatcher: Arc<Dispatcher>,
}

impl Gists {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// List gists
    ///
    /// # Arguments
    /// * `user` - List this user's public gists; `None` lists the
    ///   authenticated user's gists (or public gists when anonymous)
    ///
    /// # Example
    /// ```rust,no_run
    /// use ghub_api::{ClientOptions, GitHub};
    ///
    /// # async fn example() -> ghub_api::Result<()> {
    /// let github = GitHub::new(ClientOptions::new())?;
    /// let response = github.gists().list(Some("octocat")).await?;
    /// println!("{} gists", response.body().as_array().map_or(0, Vec::len));
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, user: Option<&str>) -> Result<Response> {
        let path = match user {
            Some(user) => format!("/users/{}/gists", segment(user)),
            None => "/gists".to_string(),
        };
        self.call(&path, Verb::Get, None).await
    }

    /// Get a single gist
    pub async fn get(&self, id: &str) -> Result<Response> {
        let path = format!("/gists/{}", segment(id));
        self.call(&path, Verb::Get, None).await
    }

    /// Create a gist
    ///
    /// # Errors
    /// Returns an error if the payload cannot be encoded or the call cannot
    /// complete.
    pub async fn create(&self, gist: &NewGist) -> Result<Response> {
        let body = serde_json::to_value(gist)?;
        self.call("/gists", Verb::Post, Some(body)).await
    }

    /// Edit a gist's description or files
    pub async fn edit(&self, id: &str, update: &GistUpdate) -> Result<Response> {
        let body = serde_json::to_value(update)?;
        let path = format!("/gists/{}", segment(id));
        self.call(&path, Verb::Patch, Some(body)).await
    }

    /// Delete a gist, GitHub answers 204 on success
    pub async fn delete(&self, id: &str) -> Result<Response> {
        let path = format!("/gists/{}", segment(id));
        self.call(&path, Verb::Delete, None).await
    }

    /// Star a gist
    pub async fn star(&self, id: &str) -> Result<Response> {
        let path = format!("/gists/{}/star", segment(id));
        self.call(&path, Verb::Put, None).await
    }

    pub async fn unstar(&self, id: &str) -> Result<Response> {
        let path = format!("/gists/{}/star", segment(id));
        self.call(&path, Verb::Delete, None).await
    }

    /// Check whether a gist is starred: 204 if starred, 404 if not
    pub async fn is_starred(&self, id: &str) -> Result<Response> {
        let path = format!("/gists/{}/star", segment(id));
        self.call(&path, Verb::Get, None).await
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
