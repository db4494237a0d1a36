//! GitHub API client library
//!
//! This library provides a single entry point, [`GitHub`], that centralizes
//! authentication and transport for the GitHub REST API and exposes
//! resource-scoped sub-clients built on top of one dispatch operation.
//!
//! ## Modules
//!
//! - [`client`]: The client facade and its cached sub-clients
//! - [`dispatcher`]: Builds and executes one HTTP call per request
//! - [`auth`]: Authentication mode selection and credentials
//! - [`request`]: Verbs, per-verb shaping and request descriptions
//! - [`response`]: Normalized call results
//! - [`gists`], [`issues`], [`pulls`]: Resource sub-clients
//! - [`types`]: Request payloads used by the sub-clients

pub mod auth;
pub mod client;
pub mod constants;
pub mod dispatcher;
mod encode;
pub mod error;
pub mod gists;
pub mod issues;
pub mod options;
pub mod pulls;
pub mod request;
pub mod response;
pub mod types;

// Re-export public API
pub use auth::{AuthenticationMode, Credentials};
pub use client::GitHub;
pub use dispatcher::Dispatcher;
pub use error::{Error, Result};
pub use gists::Gists;
pub use issues::Issues;
pub use options::ClientOptions;
pub use pulls::Pulls;
pub use request::{Payload, RequestOptions, RequestSpec, Verb, VerbShape};
pub use response::Response;
pub use types::{
    GistFile, GistUpdate, IssueUpdate, NewGist, NewIssue, NewPullRequest, PullRequestUpdate,
};
