use contracts::domain::a001_collection::FieldDefinition;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u503_suggest_fields::{
    apply_suggestions, clean_suggestions, ApplyMode, SuggestFields, SuggestFieldsRequest,
    SuggestFieldsResponse,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Spinner};

use super::api;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[derive(Debug, Clone, PartialEq)]
enum Suggestion {
    Loading,
    Failed(String),
    Ready(SuggestFieldsResponse),
}

/// Field suggestions for a collection, shown in place of the field editor.
///
/// Asks once when opened; accepted suggestions are written into `fields`
/// and the panel closes through `on_close`.
#[component]
pub fn FieldSuggestionPanel(
    collection_name: String,
    description: String,
    fields: RwSignal<Vec<FieldDefinition>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let suggestion = RwSignal::new(Suggestion::Loading);
    let request = StoredValue::new(SuggestFieldsRequest::new(&collection_name, &description));

    let ask = move || {
        suggestion.set(Suggestion::Loading);
        let request = request.get_value();
        let session = session.get_untracked();
        spawn_local(async move {
            let next = match api::suggest_fields(&session, &request).await {
                Ok(mut response) => {
                    response.fields = clean_suggestions(&response.fields);
                    log::info!(
                        "{}: {} field(s) from {}",
                        SuggestFields::full_name(),
                        response.fields.len(),
                        response.provider
                    );
                    Suggestion::Ready(response)
                }
                Err(e) => Suggestion::Failed(e),
            };
            // the dialog may have been closed while waiting
            let _ = suggestion.try_set(next);
        });
    };
    ask();

    let apply = move |mode: ApplyMode| {
        let Suggestion::Ready(response) = suggestion.get_untracked() else {
            return;
        };
        fields.update(|current| *current = apply_suggestions(current, &response.fields, mode));
        on_close.run(());
    };

    view! {
        <div class="suggestion-panel">
            <div class="suggestion-panel__header">
                <h3>{icon("zap")} {SuggestFields::display_name()}</h3>
                <button type="button" class="button button--icon" title="Close" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>

            {move || match suggestion.get() {
                Suggestion::Loading => view! {
                    <div class="suggestion-panel__loading">
                        <Spinner />
                        <span>"Asking for a field schema..."</span>
                    </div>
                }
                .into_any(),
                Suggestion::Failed(message) => view! {
                    <div class="warning-box">
                        <div>{message}</div>
                        <button type="button" class="button button--secondary" on:click=move |_| ask()>
                            {icon("refresh")}
                            "Try again"
                        </button>
                    </div>
                }
                .into_any(),
                Suggestion::Ready(response) => {
                    let count = response.fields.len();
                    let provider = response.provider.clone();
                    let rows = response
                        .fields
                        .into_iter()
                        .map(|f| view! {
                            <tr class="table__row">
                                <td class="table__cell">{f.key}</td>
                                <td class="table__cell">{f.label}</td>
                                <td class="table__cell">{f.field_type.label()}</td>
                                <td class="table__cell">{if f.required { "Yes" } else { "" }}</td>
                                <td class="table__cell">{f.options.map(|o| o.join(", ")).unwrap_or_default()}</td>
                            </tr>
                        })
                        .collect_view();
                    view! {
                        <p class="form__help">
                            {format!("{} field(s) suggested", count)}
                            {(!provider.is_empty()).then(|| format!(" by {}", provider))}
                        </p>
                        <div class="table">
                            <table class="table__data">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Key"</th>
                                        <th class="table__header-cell">"Label"</th>
                                        <th class="table__header-cell">"Type"</th>
                                        <th class="table__header-cell">"Required"</th>
                                        <th class="table__header-cell">"Options"</th>
                                    </tr>
                                </thead>
                                <tbody>{rows}</tbody>
                            </table>
                        </div>
                        <div class="suggestion-panel__actions">
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                                "Cancel"
                            </Button>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| apply(ApplyMode::Append)>
                                "Add new fields"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| apply(ApplyMode::Replace)>
                                "Replace fields"
                            </Button>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
