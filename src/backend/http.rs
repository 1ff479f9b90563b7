//! `reqwest` client for the upstream query service.

use serde::Serialize;
use serde_json::Value;

use super::{BackendError, QueryBackend, is_error_envelope};
use crate::config::BackendConfig;

pub struct HttpQueryBackend {
    http: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct InterpretRequest<'a> {
    query: &'a str,
}

impl HttpQueryBackend {
    /// Build a client for the configured upstream URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: config.url.clone() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl QueryBackend for HttpQueryBackend {
    async fn interpret(&self, query: &str) -> Result<Value, BackendError> {
        let response = self
            .http
            .post(&self.url)
            .json(&InterpretRequest { query })
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        parse_upstream_body(status, text)
    }
}

/// Decode an upstream reply.
///
/// A JSON object is accepted on any 2xx status. On other statuses it is only
/// accepted when it is an error envelope, so the upstream's own message
/// reaches the caller.
pub(crate) fn parse_upstream_body(status: u16, text: String) -> Result<Value, BackendError> {
    let parsed = serde_json::from_str::<Value>(&text).ok().filter(Value::is_object);
    let success = (200..300).contains(&status);
    match parsed {
        Some(body) if success || is_error_envelope(&body) => Ok(body),
        _ if !success => Err(BackendError::Status { status, body: text }),
        _ => Err(BackendError::Parse(format!("expected JSON object, got: {}", truncate(&text, 200)))),
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
