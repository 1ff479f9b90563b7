//! `POST /query`: validate the submitted text and forward it upstream.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::backend::is_error_envelope;
use crate::state::AppState;

/// Pull a non-empty `query` string out of a request body.
///
/// Whitespace-only text counts as non-empty and is forwarded as-is.
pub(crate) fn extract_query(body: Option<&Value>) -> Option<String> {
    body?
        .get("query")?
        .as_str()
        .filter(|q| !q.is_empty())
        .map(str::to_owned)
}

/// Error envelope in the same shape the upstream uses.
pub(crate) fn error_body(message: &str) -> Value {
    json!({ "status": "error", "message": message })
}

/// Number of records in a success envelope, for logging.
pub(crate) fn record_count(body: &Value) -> usize {
    body.pointer("/results/records")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// `POST /query` — interpret a natural-language query via the backend.
///
/// - missing/empty `query` → `400` error envelope
/// - upstream error envelope → `500` with that envelope
/// - upstream failure → `500` error envelope
/// - otherwise → `200` with the upstream body
pub async fn process_query(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> (StatusCode, Json<Value>) {
    let payload = body.ok().map(|Json(v)| v);
    let Some(query) = extract_query(payload.as_ref()) else {
        tracing::warn!("empty query received");
        return (StatusCode::BAD_REQUEST, Json(error_body("No query provided")));
    };

    tracing::info!(%query, "processing query");

    match state.backend.interpret(&query).await {
        Ok(body) if is_error_envelope(&body) => {
            tracing::error!(message = ?body.get("message"), "query backend reported an error");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body))
        }
        Ok(body) => {
            tracing::info!(records = record_count(&body), "query processed");
            (StatusCode::OK, Json(body))
        }
        Err(e) => {
            tracing::error!(error = %e, "error processing query");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(error_body(&format!("Error processing query: {e}"))),
            )
        }
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
