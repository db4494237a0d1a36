//! Construction-time options for the GitHub client

use crate::constants::GITHUB_API_BASE;
use std::fmt;
use std::path::PathBuf;

/// Options used once when building a [`GitHub`](crate::GitHub) client
///
/// Which credentials are supplied decides the authentication mode:
/// username and password select basic auth, a token selects OAuth token
/// auth, and nothing selects anonymous access. See
/// [`Credentials::from_options`](crate::Credentials::from_options).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    pub username: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
    /// API origin, `https://api.github.com` when unset
    pub base_url: Option<String>,
    /// PEM bundle replacing the built-in trust roots
    pub ca_bundle: Option<PathBuf>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_ca_bundle(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_bundle = Some(path.into());
        self
    }

    /// The API origin requests are sent to, without a trailing slash
    pub fn api_base(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(GITHUB_API_BASE)
            .trim_end_matches('/')
    }
}

fn redact(value: &Option<String>) -> Option<&'static str> {
    value.as_ref().map(|_| "<redacted>")
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("token", &redact(&self.token))
            .field("base_url", &self.base_url)
            .field("ca_bundle", &self.ca_bundle)
            .finish()
    }
}
