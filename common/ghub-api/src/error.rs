//! Error types for GitHub API calls
//!
//! Only failures that prevent a response from being produced are errors.
//! A non-2xx status or a body that is not JSON still yields a [`Response`],
//! so callers inspect `status_code` and `body` themselves.
//!
//! [`Response`]: crate::Response

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the client and its resource sub-clients
#[derive(Debug, Error)]
pub enum Error {
    /// The network call could not complete (connect, DNS, TLS, timeout or body read)
    #[error("transport error calling {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The base URL joined with the request path is not a valid URL
    #[error("invalid request URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The configured certificate bundle could not be used
    #[error("cannot load CA bundle {}: {reason}", path.display())]
    CaBundle { path: PathBuf, reason: String },

    /// The HTTP transport could not be constructed
    #[error("failed to build HTTP transport: {0}")]
    Build(#[source] reqwest::Error),

    /// A request payload could not be encoded as JSON
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error came from the network layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ca_bundle_error_message() {
        let error = Error::CaBundle {
            path: PathBuf::from("/etc/ghub/ca.pem"),
            reason: "no certificates found".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "cannot load CA bundle /etc/ghub/ca.pem: no certificates found"
        );
        assert!(!error.is_transport());
    }

    #[test]
    fn test_invalid_url_error_message() {
        let source = url::Url::parse("not a url").unwrap_err();
        let error = Error::InvalidUrl {
            url: "not a url".to_string(),
            source,
        };

        let message = error.to_string();
        assert!(message.starts_with("invalid request URL 'not a url'"));
    }
}
