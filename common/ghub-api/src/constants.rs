//! Fixed transport parameters

use std::time::Duration;

/// GitHub API base URL
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// User-Agent header sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("ghub/", env!("CARGO_PKG_VERSION"));

/// Accept header for the v3 REST API
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Content type declared on every request
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Payload of a POST or PATCH made without a body
pub const EMPTY_JSON_BODY: &[u8] = b"[]";

/// Connect timeout
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(120);

/// Overall request timeout, covering the response read
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Query parameter carrying the OAuth token
pub const ACCESS_TOKEN_PARAM: &str = "access_token";
