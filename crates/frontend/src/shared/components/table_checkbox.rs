use leptos::prelude::*;

/// `<td>` with a row checkbox; clicks do not reach the row.
///
/// ```rust,ignore
/// <TableCheckbox
///     checked=Signal::derive(move || state.with(|s| s.selection.contains(&id)))
///     on_change=Callback::new(move |checked| toggle(id.clone(), checked))
/// />
/// ```
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}
