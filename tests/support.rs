//! Common test support utilities and fixtures
//!
//! This module provides shared functionality to reduce code duplication
//! across integration and E2E tests.

#![allow(dead_code)]

use ghub::{commands::CommandContext, config::Config};
use ghub_api::{ClientOptions, GitHub};
use serde_json::Value;
use std::{fs, path::PathBuf, process::Command};
use tempfile::TempDir;
use wiremock::{MockServer, ResponseTemplate};

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A test workspace with temporary directory and config management
pub struct Workspace {
    pub root: TempDir,
    pub config_path: PathBuf,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Create a new temporary workspace
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        let config_path = root.path().join("ghub.yaml");
        Self { root, config_path }
    }

    /// Write configuration YAML to the workspace
    pub fn write_config(&self, yaml: &str) {
        fs::write(&self.config_path, yaml).expect("Failed to write config");
    }

    /// Get the workspace root path
    pub fn path(&self) -> &std::path::Path {
        self.root.path()
    }

    /// Get the config file path as string
    pub fn config_str(&self) -> &str {
        self.config_path.to_str().expect("Config path not UTF-8")
    }
}

/// Run the ghub CLI with given arguments
///
/// Credentials from the caller's environment are cleared so runs are
/// anonymous unless the arguments say otherwise.
pub fn run_cli(args: &[&str], cwd: Option<&std::path::Path>) -> CliOutput {
    let mut cmd = Command::new("cargo");
    cmd.args([
        "run",
        "--quiet",
        "--manifest-path",
        concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"),
        "--",
    ]);
    cmd.args(args);
    for var in [
        "GITHUB_TOKEN",
        "GITHUB_USERNAME",
        "GITHUB_PASSWORD",
        "GITHUB_API_URL",
    ] {
        cmd.env_remove(var);
    }

    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().expect("Failed to execute cargo run");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Mock reply with a JSON body
pub fn json_response(status: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

/// Build a client pointed at a mock server
pub fn client_for(server: &MockServer, options: ClientOptions) -> GitHub {
    GitHub::new(options.with_base_url(server.uri())).expect("Failed to build client")
}

/// Build a command context pointed at a mock server
pub fn context_for(server: &MockServer, config: Config) -> CommandContext {
    let config = Config {
        base_url: Some(server.uri()),
        ..config
    };
    CommandContext::new(config).expect("Failed to build command context")
}
