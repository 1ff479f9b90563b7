//! Query backend: the upstream service that interprets and runs queries.
//!
//! DESIGN
//! ======
//! Natural-language translation and CRM access live in a separate service.
//! This server only forwards `{ "query": ... }` to it through the
//! [`QueryBackend`] trait, which keeps the `/query` route testable against a
//! mock. [`HttpQueryBackend`] is the production implementation.

pub mod http;

pub use http::HttpQueryBackend;

/// Errors produced while talking to the upstream query service.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The upstream returned a non-success status without an error envelope.
    #[error("upstream status {status}")]
    Status { status: u16, body: String },

    /// The upstream body was not a JSON object.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Something that can turn a natural-language query into a response body.
#[async_trait::async_trait]
pub trait QueryBackend: Send + Sync {
    /// Interpret and execute `query`, returning the upstream JSON envelope.
    ///
    /// An envelope with `"status": "error"` is returned as `Ok`; callers
    /// decide how to surface it.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure, an unexpected status,
    /// or a body that is not a JSON object.
    async fn interpret(&self, query: &str) -> Result<serde_json::Value, BackendError>;
}

/// `true` when `body` is an error envelope (`"status": "error"`).
#[must_use]
pub fn is_error_envelope(body: &serde_json::Value) -> bool {
    body.get("status").and_then(serde_json::Value::as_str) == Some("error")
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
