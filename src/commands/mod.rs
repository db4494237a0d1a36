//! Command implementations

pub mod api;
pub mod base;
pub mod gists;
pub mod init;
pub mod issues;
pub mod pulls;
pub mod validators;

pub use api::ApiCommand;
pub use base::{Command, CommandContext};
pub use gists::{GistsAction, GistsCommand};
pub use init::InitCommand;
pub use issues::{IssuesAction, IssuesCommand};
pub use pulls::{PullsAction, PullsCommand};
