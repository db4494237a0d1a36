//! GitHub API client implementation
//!
//! This module provides the main `GitHub` struct which serves as the entry point
//! for all GitHub API operations. The client fixes the authentication mode at
//! construction and hands out resource sub-clients that share its dispatcher.
//!
//! ## Architecture
//!
//! Resource endpoints are organized into separate sub-clients:
//! - `gists.rs` - Gist operations
//! - `issues.rs` - Issue operations
//! - `pulls.rs` - Pull request operations
//!
//! Each sub-client is created on first access and cached for the lifetime of
//! the client.

use crate::auth::AuthenticationMode;
use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::gists::Gists;
use crate::issues::Issues;
use crate::options::ClientOptions;
use crate::pulls::Pulls;
use crate::request::{RequestOptions, RequestSpec, Verb};
use crate::response::Response;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

/// GitHub API client
///
/// ## Example
///
/// ```rust,no_run
/// use ghub_api::{ClientOptions, GitHub, RequestOptions, Verb};
///
/// # async fn example() -> ghub_api::Result<()> {
/// let github = GitHub::new(ClientOptions::new().with_token("your_github_token"))?;
///
/// // Resource sub-clients
/// let issues = github.issues().list("rust-lang", "rust", Some("open")).await?;
///
/// // Raw calls
/// let me = github
///     .dispatch("/user", Verb::Get, None, RequestOptions::default())
///     .await?;
/// println!("{} {}", me.status_code(), me.body()["login"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GitHub {
    dispatcher: Arc<Dispatcher>,
    gists: OnceLock<Gists>,
    issues: OnceLock<Issues>,
    pulls: OnceLock<Pulls>,
}

impl GitHub {
    /// Create a new GitHub client
    ///
    /// # Arguments
    /// * `options` - Credentials, API origin and optional CA bundle
    ///
    /// # Errors
    /// Returns an error if the configured CA bundle cannot be loaded.
    /// Missing credentials are not an error; the client is then anonymous.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let dispatcher = Dispatcher::new(&options)?;
        Ok(Self {
            dispatcher: Arc::new(dispatcher),
            gists: OnceLock::new(),
            issues: OnceLock::new(),
            pulls: OnceLock::new(),
        })
    }

    /// Authentication mode selected at construction
    pub fn authentication_mode(&self) -> AuthenticationMode {
        self.dispatcher.authentication_mode()
    }

    /// Check if the client sends any credentials
    pub fn is_authenticated(&self) -> bool {
        self.authentication_mode() != AuthenticationMode::None
    }

    pub fn gists(&self) -> &Gists {
        self.gists
            .get_or_init(|| Gists::new(Arc::clone(&self.dispatcher)))
    }

    pub fn issues(&self) -> &Issues {
        self.issues
            .get_or_init(|| Issues::new(Arc::clone(&self.dispatcher)))
    }

    pub fn pulls(&self) -> &Pulls {
        self.pulls
            .get_or_init(|| Pulls::new(Arc::clone(&self.dispatcher)))
    }

    /// Perform a GitHub API call
    ///
    /// See [`Dispatcher::dispatch`].
    pub async fn dispatch(
        &self,
        path: &str,
        verb: impl Into<Verb>,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Response> {
        self.dispatcher.dispatch(path, verb, body, options).await
    }

    /// Perform a prebuilt request
    pub async fn send(&self, spec: &RequestSpec) -> Result<Response> {
        self.dispatcher.send(spec).await
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
