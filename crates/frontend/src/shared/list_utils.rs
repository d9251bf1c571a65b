//! Search and sort controls shared by the admin table and the public browser

use crate::shared::icons::icon;
use contracts::shared::catalog::{SearchScope, SortOption, SortState};
use leptos::prelude::*;

/// Text search box with a clear button; every keystroke is reported
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Search scope selector: "All fields" or one searchable field
#[component]
pub fn SearchScopeSelect(
    /// (key, label) of the searchable fields
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)] scope: Signal<SearchScope>,
    on_change: Callback<SearchScope>,
) -> impl IntoView {
    view! {
        <select
            class="select"
            prop:value=move || scope.with(|s| s.as_value().to_string())
            on:change=move |ev| on_change.run(SearchScope::from_value(&event_target_value(&ev)))
        >
            <option value=SearchScope::ALL_VALUE>"All fields"</option>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|(key, label)| view! { <option value=key>{label}</option> })
                    .collect_view()
            }}
        </select>
    }
}

/// Sort key selector plus direction toggle
#[component]
pub fn SortControls(
    #[prop(into)] options: Signal<Vec<SortOption>>,
    #[prop(into)] sort: Signal<SortState>,
    /// Picking another key
    on_key: Callback<String>,
    on_flip: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="sort-controls">
            <select
                class="select"
                prop:value=move || sort.with(|s| s.key.clone())
                on:change=move |ev| on_key.run(event_target_value(&ev))
            >
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|o| view! { <option value=o.key>{o.label}</option> })
                        .collect_view()
                }}
            </select>
            <button
                class="button button--secondary"
                title=move || sort.with(|s| s.order.title())
                on:click=move |_| on_flip.run(())
            >
                {move || sort.with(|s| s.order.arrow())}
            </button>
        </div>
    }
}
