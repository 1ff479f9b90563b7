//! Wire DTOs for the `POST /query` boundary.
//!
//! DESIGN
//! ======
//! `query_details` is the interpreter's raw LLM output echoed back, so no
//! attribute type is trusted. Every attribute accepts any JSON value and is
//! kept in a displayable form; missing or `null` attributes fall back to
//! defaults. Only a body that is not a JSON object fails to parse.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single result record: column name to raw JSON value, in backend order.
pub type Record = serde_json::Map<String, Value>;

/// Request body for `POST /query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// How the backend interpreted the natural-language query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryDetails {
    /// Target CRM module (e.g. `"Leads"`).
    #[serde(default, deserialize_with = "lenient_text")]
    pub module: String,
    /// Fields requested from the module, in display order.
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub fields: Vec<String>,
    /// Filter criteria in the CRM's own syntax.
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub criteria: Option<String>,
    /// Page number as sent; usually a number, sometimes a string.
    #[serde(default)]
    pub page: Value,
    #[serde(default)]
    pub per_page: Value,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub sort_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub sort_order: String,
}

/// One page of records plus the server-side totals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default, deserialize_with = "lenient_records")]
    pub records: Vec<Record>,
    /// Total matching records reported by the backend.
    #[serde(default)]
    pub count: Value,
    /// `true` when the backend has further pages.
    #[serde(default, deserialize_with = "lenient_flag")]
    pub more_records: bool,
}

/// Success body of `POST /query`.
///
/// `status` and `message` are carried for completeness; the page only reads
/// `query_details` and `results`. A section that is not an object reads as
/// absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub query_details: Option<QueryDetails>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub results: Option<ResultSet>,
}

/// Display text for an arbitrary JSON value. `null` reads as empty.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `true` for `null`, `false`, `""` and numeric zero.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(&Value::deserialize(deserializer)?))
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok((!value.is_null()).then(|| value_text(&value)))
}

fn lenient_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(value_text).collect(),
        other => vec![value_text(&other)],
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(!is_falsy(&Value::deserialize(deserializer)?))
}

/// Object entries are kept as-is; any other entry becomes a one-column
/// `value` record so it still shows up as a row.
fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => map,
            other => Record::from_iter([("value".to_owned(), other)]),
        })
        .collect())
}

fn lenient_section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}
