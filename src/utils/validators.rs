//! Configuration validation utilities
//!
//! This module provides centralized validation logic for the configuration
//! file, separating hard errors (the client cannot be built as configured)
//! from warnings (the client works, but not the way the user probably meant).

use crate::config::Config;
use anyhow::anyhow;
use regex::Regex;
use std::sync::LazyLock;

static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/\s?#]+(/[^\s?#]*)?$").expect("valid URL regex"));

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// base_url is not an http(s) URL
    InvalidBaseUrl(String),
    /// ca_bundle points at a file that does not exist
    MissingCaBundle(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBaseUrl(url) => {
                write!(f, "base_url must be an http(s) URL without query: '{url}'")
            }
            ValidationError::MissingCaBundle(path) => {
                write!(f, "ca_bundle file does not exist: '{path}'")
            }
        }
    }
}

/// Validates a complete configuration object
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(base_url) = &config.base_url
        && !HTTP_URL.is_match(base_url)
    {
        errors.push(ValidationError::InvalidBaseUrl(base_url.clone()));
    }

    if let Some(ca_bundle) = &config.ca_bundle
        && !ca_bundle.exists()
    {
        let path = ca_bundle.display().to_string();
        errors.push(ValidationError::MissingCaBundle(path));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Describe credential settings that will not be used as written
///
/// Credentials are picked with a fixed precedence (username+password, then
/// token, then anonymous), so partial or conflicting settings are legal but
/// worth pointing out.
pub fn credential_warnings(config: &Config) -> Vec<String> {
    let has = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
    let username = has(&config.username);
    let password = has(&config.password);
    let token = has(&config.token);

    let mut warnings = Vec::new();
    let warning = match (username, password) {
        (true, false) => Some("username is set without password; basic auth disabled"),
        (false, true) => Some("password is set without username; basic auth disabled"),
        (true, true) if token => Some("username/password and token both set; token is ignored"),
        _ => None,
    };
    warnings.extend(warning.map(str::to_string));
    warnings
}

/// Convert validation errors to anyhow::Error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Validation errors: {}", error_messages.join("; "))
}
