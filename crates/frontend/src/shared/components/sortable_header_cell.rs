//! Sortable table header cell
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Title"
//!     sort_key="title"
//!     sort=Signal::derive(move || state.with(|s| s.sort.clone()))
//!     on_sort=Callback::new(move |key| state.update(|s| s.sort.toggle(&key)))
//!     style=width.style()
//! />
//! ```

use contracts::shared::catalog::SortState;
use leptos::prelude::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    #[prop(into)] sort_key: String,
    #[prop(into)] sort: Signal<SortState>,
    on_sort: Callback<String>,
    /// Inline width constraints of the column
    #[prop(optional, into)]
    style: String,
) -> impl IntoView {
    let key_for_click = sort_key.clone();
    let key_for_class = sort_key.clone();

    view! {
        <th class="table__header-cell" style=style>
            <div
                class="table__sortable-header"
                on:click=move |_| on_sort.run(key_for_click.clone())
            >
                {label}
                <span class=move || {
                    if sort.with(|s| s.key == key_for_class) {
                        "table__sort-indicator table__sort-indicator--active"
                    } else {
                        "table__sort-indicator"
                    }
                }>
                    {move || sort.with(|s| s.indicator(&sort_key))}
                </span>
            </div>
        </th>
    }
}
