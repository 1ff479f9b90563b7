use super::*;
use crate::config::BackendTimeouts;
use serde_json::json;

#[test]
fn parse_upstream_body_accepts_success_object() {
    let body = parse_upstream_body(200, r#"{"status":"success","query_details":null,"results":null}"#.into()).unwrap();
    assert_eq!(body["status"], json!("success"));
}

#[test]
fn parse_upstream_body_passes_through_error_envelope_on_500() {
    let body = parse_upstream_body(500, r#"{"status":"error","message":"Zoho API Error: bad criteria"}"#.into()).unwrap();
    assert!(is_error_envelope(&body));
    assert_eq!(body["message"], json!("Zoho API Error: bad criteria"));
}

#[test]
fn parse_upstream_body_rejects_plain_text_error_status() {
    let err = parse_upstream_body(502, "Bad Gateway".into()).unwrap_err();
    assert!(matches!(err, BackendError::Status { status: 502, .. }));
}

#[test]
fn parse_upstream_body_rejects_non_error_object_on_failure_status() {
    let err = parse_upstream_body(404, r#"{"detail":"not found"}"#.into()).unwrap_err();
    assert!(matches!(err, BackendError::Status { status: 404, .. }));
}

#[test]
fn parse_upstream_body_rejects_non_object_success() {
    assert!(matches!(parse_upstream_body(200, "[1,2]".into()), Err(BackendError::Parse(_))));
    assert!(matches!(parse_upstream_body(200, "<html>".into()), Err(BackendError::Parse(_))));
}

#[test]
fn truncate_respects_char_boundaries() {
    assert_eq!(truncate("héllo", 2), "hé");
    assert_eq!(truncate("abc", 10), "abc");
}

#[test]
fn new_keeps_configured_url() {
    let cfg = BackendConfig {
        url: "http://localhost:5000/query".into(),
        timeouts: BackendTimeouts { request_secs: 5, connect_secs: 1 },
    };
    let backend = HttpQueryBackend::new(&cfg).unwrap();
    assert_eq!(backend.url(), "http://localhost:5000/query");
}
