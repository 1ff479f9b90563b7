//! Assistant page state: query text, last interpretation, last results.
//!
//! DESIGN
//! ======
//! The page owns one `RwSignal<QueryState>` and mutates it only through the
//! methods here, so the execute lifecycle can be tested without a browser.
//! `query_details` and `results` are only ever written together by
//! [`QueryState::finish_execute`].

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::net::types::{QueryDetails, QueryResponse, ResultSet};

/// Example queries offered as one-click starting points.
pub const SAMPLE_QUERIES: [&str; 3] = [
    "Show me all open leads from Mumbai",
    "Find all deals worth more than 50000 rupees",
    "List all contacts who haven't been contacted in last 30 days",
];

/// State for the CRM assistant page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryState {
    /// Raw natural-language text in the input.
    pub query: String,
    /// Interpretation from the last successful response.
    pub query_details: Option<QueryDetails>,
    /// Records from the last successful response.
    pub results: Option<ResultSet>,
    /// `true` while one request is in flight.
    pub loading: bool,
}

impl QueryState {
    /// Replace the query text (keystroke or sample selection).
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// `false` while a request is in flight.
    pub fn can_execute(&self) -> bool {
        !self.loading
    }

    /// Enter the loading state and return the text to submit.
    ///
    /// Returns `None` without touching anything when a request is already in
    /// flight, so a second execute never issues a second request.
    pub fn begin_execute(&mut self) -> Option<String> {
        if !self.can_execute() {
            return None;
        }
        self.loading = true;
        Some(self.query.clone())
    }

    /// Apply the outcome of the request started by [`Self::begin_execute`].
    ///
    /// On success both sections are replaced wholesale, `null` included. On
    /// failure both keep their prior values. `loading` is cleared either way.
    ///
    /// # Errors
    ///
    /// Hands the request error back so the caller can log it.
    pub fn finish_execute(&mut self, outcome: Result<QueryResponse, String>) -> Result<(), String> {
        self.loading = false;
        let resp = outcome?;
        self.query_details = resp.query_details;
        self.results = resp.results;
        Ok(())
    }
}
