//! Central constants for the ghub application

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "ghub.yaml";
}

/// Environment variables that override the configuration file
pub mod env {
    pub const TOKEN: &str = "GITHUB_TOKEN";
    pub const USERNAME: &str = "GITHUB_USERNAME";
    pub const PASSWORD: &str = "GITHUB_PASSWORD";
    pub const API_URL: &str = "GITHUB_API_URL";
}

/// Logging defaults
pub mod logging {
    /// Filter used when neither RUST_LOG nor -v is given
    pub const DEFAULT_FILTER: &str = "warn";
}
