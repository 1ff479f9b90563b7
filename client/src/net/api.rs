//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the query endpoint is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Network failures, non-2xx statuses and unparseable bodies all collapse to
//! one `Err(String)`. Callers log it and keep their previous state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::QueryResponse;
#[cfg(feature = "hydrate")]
use super::types::QueryRequest;

/// Path of the query endpoint, relative to the page origin.
pub const QUERY_ENDPOINT: &str = "/query";

#[cfg(any(test, feature = "hydrate"))]
fn query_failed_message(status: u16) -> String {
    format!("query request failed: {status}")
}

/// Submit `query` to `POST /query` and decode the interpretation + results.
///
/// The text is sent exactly as given; an empty query is not rejected here.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body is not a valid query response.
pub async fn execute_query(query: &str) -> Result<QueryResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = QueryRequest { query: query.to_owned() };
        let resp = gloo_net::http::Request::post(QUERY_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(query_failed_message(resp.status()));
        }
        resp.json::<QueryResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}
