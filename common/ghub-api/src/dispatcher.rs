//! Request dispatch
//!
//! The [`Dispatcher`] turns one [`RequestSpec`] into exactly one HTTP call:
//!
//! 1. join the API origin with the (authenticated) path
//! 2. pick method and payload from the verb table ([`Verb::shape`])
//! 3. send once, with fixed timeouts, no redirects and pinned TLS roots
//! 4. normalize status, headers and JSON body into a [`Response`]
//!
//! The HTTP transport is built inside each call and dropped when the call
//! returns, so nothing is shared between calls except read-only settings.

use crate::auth::{AuthenticationMode, Credentials};
use crate::constants::{
    CONNECT_TIMEOUT, DEFAULT_USER_AGENT, GITHUB_ACCEPT, JSON_CONTENT_TYPE, REQUEST_TIMEOUT,
};
use crate::error::{Error, Result};
use crate::options::ClientOptions;
use crate::request::{RequestOptions, RequestSpec, Verb};
use crate::response::Response;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::{Certificate, Client};
use serde_json::Value;
use std::path::Path;
use tracing::{Span, debug, instrument, trace};
use url::Url;

/// Trust roots used to verify the server certificate
#[derive(Clone)]
enum TrustRoots {
    /// Mozilla roots compiled into the binary
    BuiltIn,
    /// Only the certificates from a PEM bundle
    Pinned(Vec<Certificate>),
}

/// Executes API calls for a single set of credentials
pub struct Dispatcher {
    base_url: String,
    credentials: Credentials,
    roots: TrustRoots,
}

impl Dispatcher {
    /// Create a dispatcher from client options
    ///
    /// # Errors
    /// Returns [`Error::CaBundle`] if `ca_bundle` is set but cannot be read
    /// or holds no certificates.
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let roots = match &options.ca_bundle {
            Some(path) => TrustRoots::Pinned(load_ca_bundle(path)?),
            None => TrustRoots::BuiltIn,
        };

        Ok(Self {
            base_url: options.api_base().to_string(),
            credentials: Credentials::from_options(options),
            roots,
        })
    }

    pub fn authentication_mode(&self) -> AuthenticationMode {
        self.credentials.mode()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a GitHub API call
    ///
    /// # Arguments
    /// * `path` - API-relative path, optionally with a query string
    /// * `verb` - Request verb, e.g. `Verb::Post` or `"post"`
    /// * `body` - JSON payload; only POST and PATCH send it
    /// * `options` - Per-call options, currently not interpreted
    ///
    /// # Errors
    /// Returns [`Error::Transport`] when the call cannot complete. A non-2xx
    /// status or a non-JSON body is not an error.
    pub async fn dispatch(
        &self,
        path: &str,
        verb: impl Into<Verb>,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Response> {
        let mut spec = RequestSpec::new(path, verb.into()).with_options(options);
        spec.body = body;
        self.send(&spec).await
    }

    /// Perform the call described by `spec`
    ///
    /// # Errors
    /// See [`Dispatcher::dispatch`].
    #[instrument(
        name = "github_request",
        skip(self, spec),
        fields(
            verb = %spec.verb,
            path = %spec.path,
            auth = %self.credentials.mode(),
            status = tracing::field::Empty,
        )
    )]
    pub async fn send(&self, spec: &RequestSpec) -> Result<Response> {
        if !spec.options.is_empty() {
            trace!(
                options = ?spec.options.keys().collect::<Vec<_>>(),
                "request options are not interpreted"
            );
        }

        // Logged and reported URL, never carries the token
        let display_url = format!("{}{}", self.base_url, spec.path);
        let effective_path = self.credentials.effective_path(&spec.path);
        let raw_url = format!("{}{}", self.base_url, effective_path);
        let url = Url::parse(&raw_url).map_err(|source| Error::InvalidUrl {
            url: display_url.clone(),
            source,
        })?;

        let shape = spec.verb.shape();
        let transport = self.transport()?;
        let request = transport.request(shape.method, url);
        let mut request = self.credentials.apply(request);
        if let Some(payload) = spec.payload() {
            request = request.body(payload);
        }

        let response = request
            .send()
            .await
            .map_err(|source| transport_error(&display_url, source))?;

        let status = response.status().as_u16();
        Span::current().record("status", status);
        let headers = response.headers().clone();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| transport_error(&display_url, source))?;

        debug!(status, len = bytes.len(), "GitHub API call completed");
        Ok(Response::from_parts(status, &headers, &bytes))
    }

    /// Build the per-call HTTP transport
    fn transport(&self) -> Result<Client> {
        let mut builder = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(default_headers())
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .redirect(Policy::none());

        if let TrustRoots::Pinned(certificates) = &self.roots {
            builder = builder.tls_built_in_root_certs(false);
            for certificate in certificates {
                builder = builder.add_root_certificate(certificate.clone());
            }
        }

        builder.build().map_err(Error::Build)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let roots = match &self.roots {
            TrustRoots::BuiltIn => "built-in".to_string(),
            TrustRoots::Pinned(certificates) => format!("{} pinned", certificates.len()),
        };
        f.debug_struct("Dispatcher")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("roots", &roots)
            .finish()
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
    headers
}

/// Strip the URL from reqwest errors, it may carry the access token
fn transport_error(display_url: &str, source: reqwest::Error) -> Error {
    Error::Transport {
        url: display_url.to_string(),
        source: source.without_url(),
    }
}

fn load_ca_bundle(path: &Path) -> Result<Vec<Certificate>> {
    let pem = std::fs::read(path).map_err(|e| Error::CaBundle {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let certificates = Certificate::from_pem_bundle(&pem).map_err(|e| Error::CaBundle {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if certificates.is_empty() {
        return Err(Error::CaBundle {
            path: path.to_path_buf(),
            reason: "no certificates found".to_string(),
        });
    }

    Ok(certificates)
}
