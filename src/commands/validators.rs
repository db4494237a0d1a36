//! Command argument validation utilities
//!
//! This module provides centralized validation logic for command arguments
//! after clap parsing. It handles domain-specific validation rules that
//! go beyond basic argument parsing.

use anyhow::{Result, anyhow};

/// States accepted by the list endpoints
pub const LIST_STATES: [&str; 3] = ["open", "closed", "all"];

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
    /// Value outside a fixed set of choices
    UnknownChoice {
        argument: String,
        value: String,
        choices: Vec<String>,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => write!(f, "Invalid value '{value}' for {argument}: {reason}"),
            CommandValidationError::UnknownChoice {
                argument,
                value,
                choices,
            } => {
                write!(f, "Invalid value '{value}' for {argument}: ")?;
                write!(f, "expected one of {}", choices.join(", "))
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

fn invalid(argument: &str, value: &str, reason: &str) -> anyhow::Error {
    validation_error_to_anyhow(CommandValidationError::InvalidValue {
        argument: argument.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    })
}

/// Validate an API path given to `ghub api`
///
/// Paths are relative to the API origin, so full URLs are rejected.
pub fn validate_api_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid("path", path, "path cannot be empty"));
    }
    if path.contains("://") {
        return Err(invalid(
            "path",
            path,
            "expected a path relative to the API origin, not a URL",
        ));
    }
    if path.chars().any(char::is_whitespace) {
        return Err(invalid("path", path, "path cannot contain whitespace"));
    }
    Ok(())
}

/// Validate a list state filter
pub fn validate_state(state: &Option<String>) -> Result<()> {
    if let Some(state) = state
        && !LIST_STATES.contains(&state.as_str())
    {
        let error = CommandValidationError::UnknownChoice {
            argument: "--state".to_string(),
            value: state.clone(),
            choices: LIST_STATES.iter().map(|s| s.to_string()).collect(),
        };
        return Err(validation_error_to_anyhow(error));
    }
    Ok(())
}

/// Validate an issue or pull request number
pub fn validate_number(number: u64) -> Result<()> {
    if number == 0 {
        return Err(invalid("number", "0", "numbers start at 1"));
    }
    Ok(())
}

/// Validate a title
///
/// Ensures titles are not empty or whitespace only
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(invalid(
            "--title",
            title,
            "title cannot be empty or contain only whitespace",
        ));
    }
    Ok(())
}

/// Validate a gist id
pub fn validate_gist_id(id: &str) -> Result<()> {
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid("gist id", id, "gist ids are alphanumeric"));
    }
    Ok(())
}
