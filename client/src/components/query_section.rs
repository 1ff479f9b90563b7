//! Query form: text input, execute button, and sample queries.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fully controlled by the page. Every input event sends the whole text up
//! through `on_query`, and sample buttons send their own text the same way.

use leptos::prelude::*;

/// Query input form.
///
/// The execute button is disabled and shows a spinner while `loading`; the
/// page also ignores execute requests that arrive while loading.
#[component]
pub fn QuerySection(
    #[prop(into)] query: Signal<String>,
    #[prop(into)] loading: Signal<bool>,
    on_query: Callback<String>,
    on_execute: Callback<()>,
    sample_queries: &'static [&'static str],
) -> impl IntoView {
    let samples = sample_queries
        .iter()
        .map(|sample| {
            let text = *sample;
            view! {
                <button
                    class="query-section__sample"
                    type="button"
                    on:click=move |_| on_query.run(text.to_owned())
                >
                    <span class="icon icon--arrow-right"></span>
                    {text}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="query-section">
            <div class="query-section__input">
                <label class="query-section__label">
                    <span class="icon icon--search"></span>
                    "Your Query"
                </label>
                <textarea
                    class="query-section__textarea"
                    placeholder="Enter your query here..."
                    prop:value=move || query.get()
                    on:input=move |ev| on_query.run(event_target_value(&ev))
                ></textarea>
                <div class="query-section__actions">
                    <button
                        class="btn btn--primary"
                        type="button"
                        disabled=move || loading.get()
                        on:click=move |_| on_execute.run(())
                    >
                        {move || {
                            if loading.get() {
                                view! { <span class="spinner"></span> }.into_any()
                            } else {
                                view! { <span class="icon icon--arrow-right"></span> }.into_any()
                            }
                        }}
                        "Execute Query"
                    </button>
                </div>
            </div>
            <div class="query-section__samples">
                <h3 class="query-section__samples-title">"Sample Queries:"</h3>
                <div class="query-section__sample-list">{samples}</div>
            </div>
        </div>
    }
}
