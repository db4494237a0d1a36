//! Repository argument parsing
//!
//! Commands take a repository as `OWNER/REPO`, but pasting a clone URL is
//! just as common, so the same formats `git remote -v` prints are accepted.

use anyhow::{Result, anyhow};
use regex::Regex;
use std::sync::LazyLock;

static SSH_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^git@[^:]+:([^/]+)/([^/]+)$").expect("valid SSH regex"));
static HTTPS_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/]+/([^/]+)/([^/]+)$").expect("valid HTTPS regex"));
static SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$").expect("valid slug regex")
});

/// Parse a repository argument into (owner, repository_name)
///
/// Supports:
/// - Slug: `owner/repo`
/// - SSH: `git@github.com:owner/repo.git`
/// - HTTPS: `https://github.com/owner/repo`
///
/// # Errors
/// Returns an error if the argument matches none of these formats
pub fn parse_repo_slug(input: &str) -> Result<(String, String)> {
    let trimmed = input.trim().trim_end_matches('/').trim_end_matches(".git");

    for pattern in [&*SSH_URL, &*HTTPS_URL, &*SLUG] {
        if let Some(captures) = pattern.captures(trimmed) {
            return Ok((captures[1].to_string(), captures[2].to_string()));
        }
    }

    Err(anyhow!(
        "Invalid repository '{}': expected OWNER/REPO or a GitHub URL",
        input
    ))
}
