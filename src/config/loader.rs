//! Configuration file loading

use crate::constants::env as env_vars;
use crate::utils::validators;
use anyhow::{Context, Result};
use ghub_api::ClientOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings read from `ghub.yaml`, the environment and command-line flags
#[derive(Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub username: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
    /// API origin, e.g. `https://ghe.example.com/api/v3`
    pub base_url: Option<String>,
    /// PEM bundle to trust instead of the built-in roots
    pub ca_bundle: Option<PathBuf>,
}

/// Credential values given on the command line
#[derive(Clone, Default)]
pub struct CredentialOverrides {
    pub username: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;

        // An empty file (or one holding only comments) is an empty config
        let config: Config = if content.lines().all(is_blank_yaml_line) {
            Config::default()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file '{}'", path))?
        };

        let config = config.resolve_relative_paths(Path::new(path));
        config.validate()?;

        Ok(config)
    }

    /// Load a config file, tolerating a missing file unless it was asked for
    ///
    /// The default config path is optional; a path given explicitly with
    /// `--config` must exist.
    pub fn load_or_default(path: &str, explicit: bool) -> Result<Self> {
        if !explicit && !Path::new(path).exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Apply `GITHUB_*` environment variables on top of the file settings
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(token) = lookup(env_vars::TOKEN) {
            self.token = Some(token);
        }
        if let Some(username) = lookup(env_vars::USERNAME) {
            self.username = Some(username);
        }
        if let Some(password) = lookup(env_vars::PASSWORD) {
            self.password = Some(password);
        }
        if let Some(base_url) = lookup(env_vars::API_URL) {
            self.base_url = Some(base_url);
        }
        self
    }

    /// Apply command-line credentials, which win over file and environment
    pub fn with_overrides(mut self, overrides: &CredentialOverrides) -> Self {
        if let Some(username) = &overrides.username {
            self.username = Some(username.clone());
        }
        if let Some(password) = &overrides.password {
            self.password = Some(password.clone());
        }
        if let Some(token) = &overrides.token {
            self.token = Some(token.clone());
        }
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        validators::validate_config(self).map_err(validators::validation_errors_to_anyhow)
    }

    /// Credential settings that are legal but will not be used as written
    pub fn warnings(&self) -> Vec<String> {
        validators::credential_warnings(self)
    }

    /// Options for building the API client
    pub fn to_client_options(&self) -> ClientOptions {
        ClientOptions {
            username: self.username.clone(),
            password: self.password.clone(),
            token: self.token.clone(),
            base_url: self.base_url.clone(),
            ca_bundle: self.ca_bundle.clone(),
        }
    }

    /// Resolve a relative `ca_bundle` against the config file's directory
    fn resolve_relative_paths(mut self, config_path: &Path) -> Self {
        if let Some(bundle) = &self.ca_bundle
            && bundle.is_relative()
            && let Some(dir) = config_path.parent()
        {
            self.ca_bundle = Some(dir.join(bundle));
        }
        self
    }
}

fn is_blank_yaml_line(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#') || line == "---"
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("token", &redact(&self.token))
            .field("base_url", &self.base_url)
            .field("ca_bundle", &self.ca_bundle)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = Config {
            token: Some("from-file".to_string()),
            ..Config::default()
        }
        .with_env_from(env(&[
            ("GITHUB_TOKEN", "from-env"),
            ("GITHUB_API_URL", "https://ghe.example.com/api/v3"),
        ]));

        assert_eq!(config.token.as_deref(), Some("from-env"));
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://ghe.example.com/api/v3")
        );
        assert!(config.username.is_none());
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let config = Config {
            token: Some("from-file".to_string()),
            ..Config::default()
        }
        .with_env_from(env(&[("GITHUB_TOKEN", "")]));

        assert_eq!(config.token.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let overrides = CredentialOverrides {
            username: Some("cli-user".to_string()),
            password: Some("cli-pass".to_string()),
            token: None,
        };
        let lookup = env(&[("GITHUB_USERNAME", "env-user"), ("GITHUB_TOKEN", "t")]);
        let config = Config::new()
            .with_env_from(lookup)
            .with_overrides(&overrides);

        assert_eq!(config.username.as_deref(), Some("cli-user"));
        assert_eq!(config.password.as_deref(), Some("cli-pass"));
        assert_eq!(config.token.as_deref(), Some("t"));
    }

    #[test]
    fn test_to_client_options() {
        let config = Config {
            token: Some("abc".to_string()),
            base_url: Some("http://localhost:9999".to_string()),
            ..Config::default()
        };
        let options = config.to_client_options();

        assert_eq!(options.token.as_deref(), Some("abc"));
        assert_eq!(options.api_base(), "http://localhost:9999");
        assert!(options.username.is_none());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = Config {
            password: Some("hunter2".to_string()),
            token: Some("ghp_secret".to_string()),
            ..Config::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("ghp_secret"));
    }

    #[test]
    fn test_blank_yaml_lines() {
        assert!(is_blank_yaml_line(""));
        assert!(is_blank_yaml_line("---"));
        assert!(is_blank_yaml_line("  # token: abc"));
        assert!(!is_blank_yaml_line("token: abc"));
    }

    #[test]
    fn test_relative_ca_bundle_is_resolved_against_config_dir() {
        let config = Config {
            ca_bundle: Some(PathBuf::from("certs/ca.pem")),
            ..Config::default()
        }
        .resolve_relative_paths(Path::new("/etc/ghub/ghub.yaml"));

        assert_eq!(
            config.ca_bundle,
            Some(PathBuf::from("/etc/ghub/certs/ca.pem"))
        );
    }
}
