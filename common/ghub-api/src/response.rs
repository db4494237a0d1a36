//! Normalized result of a completed API call

use reqwest::header::HeaderMap;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Body, headers and status of one completed call
///
/// `body` is [`Value::Null`] when the payload was empty or not valid JSON;
/// that means "no parseable payload", not "request failed".
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    body: Value,
    headers: BTreeMap<String, String>,
    status_code: u16,
}

impl Response {
    pub fn new(status_code: u16, headers: BTreeMap<String, String>, body: Value) -> Self {
        Self {
            body,
            headers,
            status_code,
        }
    }

    /// Build a response from raw transport parts, decoding the body as JSON
    pub(crate) fn from_parts(status_code: u16, headers: &HeaderMap, bytes: &[u8]) -> Self {
        Self::new(status_code, collect_headers(headers), decode_body(bytes))
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Whether a JSON payload was decoded
    pub fn has_body(&self) -> bool {
        !self.body.is_null()
    }
}

/// Decode a payload as JSON, `Null` when empty or malformed
fn decode_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }

    match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, len = bytes.len(), "response body is not JSON");
            Value::Null
        }
    }
}

/// Flatten a header map, joining repeated headers with ", "
fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut collected: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    collected
}
