//! Panel describing how the backend interpreted the query.

#[cfg(test)]
#[path = "query_details_test.rs"]
mod query_details_test;

use leptos::prelude::*;

use crate::net::types::{QueryDetails, value_text};

/// Labeled lines for one interpretation, in display order.
///
/// Empty `criteria` reads `"None"` and empty `sort_by` reads `"Default"`.
pub fn detail_lines(details: &QueryDetails) -> Vec<(&'static str, String)> {
    vec![
        ("Module", details.module.clone()),
        ("Fields", details.fields.join(", ")),
        ("Criteria", or_fallback(details.criteria.as_deref(), "None")),
        ("Page", value_text(&details.page)),
        ("Records per page", value_text(&details.per_page)),
        ("Sort by", or_fallback(details.sort_by.as_deref(), "Default")),
        ("Sort order", details.sort_order.clone()),
    ]
}

/// Lines for the panel, or `None` when there is nothing to show.
pub fn panel_lines(details: Option<&QueryDetails>) -> Option<Vec<(&'static str, String)>> {
    details.map(detail_lines)
}

fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => fallback.to_owned(),
    }
}

/// Query interpretation panel. Renders nothing until details are present.
#[component]
pub fn QueryDetailsPanel(#[prop(into)] details: Signal<Option<QueryDetails>>) -> impl IntoView {
    move || {
        panel_lines(details.get().as_ref()).map(|lines| {
            let lines = lines
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <p class="query-details__line">
                            <strong>{label}": "</strong>
                            {value}
                        </p>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <div class="query-details">
                    <h3 class="query-details__title">"Query Details:"</h3>
                    <div class="query-details__lines">{lines}</div>
                </div>
            }
        })
    }
}
