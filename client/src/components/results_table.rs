//! Generic table of returned records with a summary line.
//!
//! Headers come from the first record only. Every row lists its own
//! record's values in that record's key order, so records with a different
//! key set are not realigned under the headers.

#[cfg(test)]
#[path = "results_table_test.rs"]
mod results_table_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::types::{Record, ResultSet, is_falsy, value_text};

/// Placeholder shown for falsy cell values.
pub const EMPTY_CELL: &str = "-";

/// Column headers: the keys of the first record, in its key order.
pub fn headers(results: &ResultSet) -> Vec<String> {
    results.records.first().map(|r| r.keys().cloned().collect()).unwrap_or_default()
}

/// Display text for one cell. Zero renders as the placeholder too.
pub fn cell_text(value: &Value) -> String {
    if is_falsy(value) {
        return EMPTY_CELL.to_owned();
    }
    value_text(value)
}

/// Cells for one row, in the record's own key order.
pub fn row_cells(record: &Record) -> Vec<String> {
    record.values().map(cell_text).collect()
}

/// `"Showing N of C records"`, plus the more-records clause when flagged.
pub fn summary_line(results: &ResultSet) -> String {
    let mut line = format!("Showing {} of {} records", results.records.len(), value_text(&results.count));
    if results.more_records {
        line.push_str(" (More records available)");
    }
    line
}

/// The result set when it has rows to show; `None` when absent or empty.
pub fn visible_results(results: Option<&ResultSet>) -> Option<&ResultSet> {
    results.filter(|r| !r.records.is_empty())
}

/// Results table. Renders nothing when there are no records.
#[component]
pub fn ResultsTable(#[prop(into)] results: Signal<Option<ResultSet>>) -> impl IntoView {
    move || {
        let current = results.get();
        visible_results(current.as_ref()).map(|r| {
            let header_cells = headers(r)
                .into_iter()
                .map(|h| view! { <th class="results-table__header">{h}</th> })
                .collect::<Vec<_>>();
            let rows = r
                .records
                .iter()
                .map(|record| {
                    let cells = row_cells(record)
                        .into_iter()
                        .map(|c| view! { <td class="results-table__cell">{c}</td> })
                        .collect::<Vec<_>>();
                    view! { <tr class="results-table__row">{cells}</tr> }
                })
                .collect::<Vec<_>>();
            let summary = summary_line(r);
            view! {
                <div class="results">
                    <div class="results__scroll">
                        <table class="results-table">
                            <thead>
                                <tr>{header_cells}</tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                    <div class="results__summary">{summary}</div>
                </div>
            }
        })
    }
}
