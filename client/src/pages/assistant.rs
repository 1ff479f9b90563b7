//! CRM assistant page: owns the query state and performs the request.
//!
//! ARCHITECTURE
//! ============
//! All view state lives in one page-scoped `RwSignal<QueryState>`. Leaf
//! components get read-only signal snapshots plus callbacks. The request
//! future writes back with `try_update`, so a response that lands after the
//! page is unmounted finds the signal disposed and is dropped.

use leptos::prelude::*;

use crate::components::query_details::QueryDetailsPanel;
use crate::components::query_section::QuerySection;
use crate::components::results_table::ResultsTable;
use crate::state::query::{QueryState, SAMPLE_QUERIES};

#[component]
pub fn CrmAssistantPage() -> impl IntoView {
    let state = RwSignal::new(QueryState::default());

    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let details = Signal::derive(move || state.with(|s| s.query_details.clone()));
    let results = Signal::derive(move || state.with(|s| s.results.clone()));

    let on_query = Callback::new(move |text: String| state.update(|s| s.set_query(text)));

    let on_execute = Callback::new(move |()| {
        // Checked untracked first so a rejected click does not notify subscribers.
        if !state.with_untracked(QueryState::can_execute) {
            return;
        }
        let Some(text) = state.try_update(QueryState::begin_execute).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::execute_query(&text).await;
            match state.try_update(|s| s.finish_execute(outcome)) {
                Some(Ok(())) => {}
                Some(Err(e)) => leptos::logging::warn!("query failed: {e}"),
                None => leptos::logging::log!("query response discarded: page unmounted"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    });

    view! {
        <div class="assistant-page">
            <div class="assistant-card">
                <div class="assistant-card__header">
                    <h1 class="assistant-card__title">
                        <span class="icon icon--database"></span>
                        "Zoho CRM Assistant"
                    </h1>
                    <p class="assistant-card__subtitle">
                        "Ask questions about your CRM data in natural language"
                    </p>
                </div>
                <div class="assistant-card__content">
                    <QuerySection
                        query=query
                        loading=loading
                        on_query=on_query
                        on_execute=on_execute
                        sample_queries=&SAMPLE_QUERIES
                    />
                    <QueryDetailsPanel details=details/>
                    <ResultsTable results=results/>
                </div>
            </div>
        </div>
    }
}
