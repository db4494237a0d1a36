//! Logical request description and per-verb transport shaping

use crate::constants::EMPTY_JSON_BODY;
use reqwest::Method;
use serde_json::Value;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// HTTP verb of a logical API call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    /// Any other method name; shaped like a GET without a body
    Other(String),
}

/// What ends up in the transport payload for a verb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    /// Nothing is sent, whatever body the caller passed
    None,
    /// The body is JSON-encoded; a missing body is sent as `[]`
    Json,
    /// An empty payload is sent, whatever body the caller passed
    Empty,
}

/// Transport shape of a verb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbShape {
    pub method: Method,
    pub payload: Payload,
}

impl Verb {
    /// Method and payload handling for this verb
    ///
    /// | verb   | method | payload |
    /// |--------|--------|---------|
    /// | get    | GET    | none    |
    /// | post   | POST   | json    |
    /// | put    | PUT    | empty   |
    /// | patch  | PATCH  | json    |
    /// | delete | DELETE | none    |
    /// | other  | GET    | none    |
    pub fn shape(&self) -> VerbShape {
        let (method, payload) = match self {
            Verb::Get => (Method::GET, Payload::None),
            Verb::Post => (Method::POST, Payload::Json),
            Verb::Put => (Method::PUT, Payload::Empty),
            Verb::Patch => (Method::PATCH, Payload::Json),
            Verb::Delete => (Method::DELETE, Payload::None),
            Verb::Other(_) => (Method::GET, Payload::None),
        };
        VerbShape { method, payload }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Verb::Get => "get",
            Verb::Post => "post",
            Verb::Put => "put",
            Verb::Patch => "patch",
            Verb::Delete => "delete",
            Verb::Other(name) => name,
        }
    }
}

impl From<&str> for Verb {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "get" => Verb::Get,
            "post" => Verb::Post,
            "put" => Verb::Put,
            "patch" => Verb::Patch,
            "delete" => Verb::Delete,
            _ => Verb::Other(s.to_string()),
        }
    }
}

impl FromStr for Verb {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Verb::from(s))
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call request overrides
///
/// Accepted on every call and carried in the [`RequestSpec`], but no option
/// currently changes how a request is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    entries: BTreeMap<String, Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// One logical API call before transport shaping
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// API-relative path, may already carry a query string
    pub path: String,
    pub verb: Verb,
    pub body: Option<Value>,
    pub options: RequestOptions,
}

impl RequestSpec {
    pub fn new(path: impl Into<String>, verb: Verb) -> Self {
        Self {
            path: path.into(),
            verb,
            body: None,
            options: RequestOptions::default(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path, Verb::Get)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Bytes sent as the request payload, `None` when nothing is sent
    pub fn payload(&self) -> Option<Vec<u8>> {
        match self.verb.shape().payload {
            Payload::None => None,
            Payload::Empty => Some(Vec::new()),
            Payload::Json => Some(match &self.body {
                Some(body) => body.to_string().into_bytes(),
                None => EMPTY_JSON_BODY.to_vec(),
            }),
        }
    }
}
