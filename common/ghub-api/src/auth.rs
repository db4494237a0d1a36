//! Authentication mode selection and credential storage
//!
//! The mode is picked once from [`ClientOptions`] and never changes for the
//! lifetime of a client. Precedence is username+password, then token, then
//! anonymous.

use crate::constants::ACCESS_TOKEN_PARAM;
use crate::options::ClientOptions;
use std::borrow::Cow;
use std::fmt;

/// Authentication strategy applied to every request of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthenticationMode {
    None,
    Basic,
    OAuthToken,
}

impl fmt::Display for AuthenticationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuthenticationMode::None => "none",
            AuthenticationMode::Basic => "basic",
            AuthenticationMode::OAuthToken => "oauth-token",
        };
        f.write_str(name)
    }
}

/// Secrets for the active authentication mode
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    None,
    Basic { username: String, password: String },
    OAuthToken { token: String },
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Credentials {
    /// Select credentials from client options
    ///
    /// Basic auth needs both a non-empty username and password. Otherwise a
    /// non-empty token selects OAuth token auth. Anything else is anonymous.
    /// Supplying both sets is not an error; basic auth wins.
    pub fn from_options(options: &ClientOptions) -> Self {
        if let (Some(username), Some(password)) =
            (non_empty(&options.username), non_empty(&options.password))
        {
            return Credentials::Basic {
                username: username.to_string(),
                password: password.to_string(),
            };
        }

        match non_empty(&options.token) {
            Some(token) => Credentials::OAuthToken {
                token: token.to_string(),
            },
            None => Credentials::None,
        }
    }

    pub fn mode(&self) -> AuthenticationMode {
        match self {
            Credentials::None => AuthenticationMode::None,
            Credentials::Basic { .. } => AuthenticationMode::Basic,
            Credentials::OAuthToken { .. } => AuthenticationMode::OAuthToken,
        }
    }

    /// Path actually requested once authentication is applied
    ///
    /// In OAuth token mode `access_token=<token>` is appended, joined with
    /// `&` when the path already has a query string and `?` otherwise. The
    /// token is appended verbatim. Other modes return the path unchanged.
    pub fn effective_path<'a>(&self, path: &'a str) -> Cow<'a, str> {
        match self {
            Credentials::OAuthToken { token } => {
                let separator = if path.contains('?') { '&' } else { '?' };
                Cow::Owned(format!("{path}{separator}{ACCESS_TOKEN_PARAM}={token}"))
            }
            Credentials::None | Credentials::Basic { .. } => Cow::Borrowed(path),
        }
    }

    /// Apply transport-level authentication to a request
    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Credentials::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            Credentials::None | Credentials::OAuthToken { .. } => request,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::None => f.write_str("None"),
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Credentials::OAuthToken { .. } => f
                .debug_struct("OAuthToken")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_wins_over_token() {
        let options = ClientOptions::new()
            .with_basic_auth("u", "p")
            .with_token("abc");
        let credentials = Credentials::from_options(&options);

        assert_eq!(credentials.mode(), AuthenticationMode::Basic);
        assert_eq!(
            credentials,
            Credentials::Basic {
                username: "u".to_string(),
                password: "p".to_string(),
            }
        );
    }

    #[test]
    fn test_token_only() {
        let credentials = Credentials::from_options(&ClientOptions::new().with_token("abc"));
        assert_eq!(credentials.mode(), AuthenticationMode::OAuthToken);
    }

    #[test]
    fn test_nothing_is_anonymous() {
        let credentials = Credentials::from_options(&ClientOptions::new());
        assert_eq!(credentials, Credentials::None);
        assert_eq!(credentials.mode(), AuthenticationMode::None);
    }

    #[test]
    fn test_empty_password_falls_back_to_token() {
        let options = ClientOptions::new()
            .with_basic_auth("u", "")
            .with_token("abc");
        let credentials = Credentials::from_options(&options);

        assert_eq!(credentials.mode(), AuthenticationMode::OAuthToken);
    }

    #[test]
    fn test_username_without_password_is_anonymous() {
        let options = ClientOptions {
            username: Some("u".to_string()),
            ..ClientOptions::default()
        };
        let credentials = Credentials::from_options(&options);
        assert_eq!(credentials.mode(), AuthenticationMode::None);
    }

    #[test]
    fn test_empty_token_is_anonymous() {
        let credentials = Credentials::from_options(&ClientOptions::new().with_token(""));
        assert_eq!(credentials.mode(), AuthenticationMode::None);
    }

    #[test]
    fn test_effective_path_without_query() {
        let credentials = Credentials::OAuthToken {
            token: "abc".to_string(),
        };
        assert_eq!(
            credentials.effective_path("/gists"),
            "/gists?access_token=abc"
        );
    }

    #[test]
    fn test_effective_path_with_query() {
        let credentials = Credentials::OAuthToken {
            token: "abc".to_string(),
        };
        assert_eq!(
            credentials.effective_path("/repos/o/r/issues?state=open"),
            "/repos/o/r/issues?state=open&access_token=abc"
        );
    }

    #[test]
    fn test_effective_path_untouched_for_basic_and_none() {
        let basic = Credentials::Basic {
            username: "u".to_string(),
            password: "p".to_string(),
        };
        let path = basic.effective_path("/gists");
        assert!(matches!(path, Cow::Borrowed("/gists")));
        assert!(matches!(
            Credentials::None.effective_path("/gists?per_page=5"),
            Cow::Borrowed("/gists?per_page=5")
        ));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let basic = Credentials::Basic {
            username: "octocat".to_string(),
            password: "hunter2".to_string(),
        };
        let token = Credentials::OAuthToken {
            token: "ghp_secret".to_string(),
        };

        assert!(!format!("{:?}", basic).contains("hunter2"));
        assert!(format!("{:?}", basic).contains("octocat"));
        assert!(!format!("{:?}", token).contains("ghp_secret"));
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(AuthenticationMode::None.to_string(), "none");
        assert_eq!(AuthenticationMode::Basic.to_string(), "basic");
        assert_eq!(AuthenticationMode::OAuthToken.to_string(), "oauth-token");
    }
}
