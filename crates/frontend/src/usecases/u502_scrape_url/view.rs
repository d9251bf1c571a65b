use contracts::domain::a001_collection::FieldDefinition;
use contracts::domain::a002_item::Metadata;
use contracts::shared::catalog::value::display;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_scrape_url::{
    apply_mapping, initial_mapping, set_target, to_backend, BackendMapping, FieldMapping,
    ManualValues, MappingStats, ScrapeUrl,
};
use leptos::prelude::*;
use serde_json::Value;
use thaw::{Button, ButtonAppearance};

use crate::shared::modal::Modal;

const PREVIEW_CHARS: usize = 30;

/// Option label of a scraped key: `key: first 30 chars of the value`
pub fn preview(key: &str, value: &Value) -> String {
    let text: String = display(value).chars().take(PREVIEW_CHARS).collect();
    format!("{}: {}", key, text)
}

/// What the dialog hands back on "Apply"
#[derive(Debug, Clone, PartialEq)]
pub struct MappingResult {
    pub metadata: Metadata,
    /// Persist `backend_mapping` for the next scrape of this collection
    pub save: bool,
    pub backend_mapping: BackendMapping,
}

/// Assign scraped values to the collection's fields, or type values by hand
#[component]
pub fn FieldMappingModal(
    scraped: Metadata,
    fields: Vec<FieldDefinition>,
    /// field key ⇒ scraped key, from the saved mapping
    saved: FieldMapping,
    on_apply: Callback<MappingResult>,
    on_close: Callback<()>,
) -> impl IntoView {
    let mapping = RwSignal::new(initial_mapping(&saved, &scraped, &fields));
    let manual = RwSignal::new(ManualValues::new());
    let save = RwSignal::new(true);
    let scraped = StoredValue::new(scraped);
    let fields = StoredValue::new(fields);

    let stats = Memo::new(move |_| {
        fields.with_value(|f| mapping.with(|m| manual.with(|v| MappingStats::compute(f, m, v))))
    });

    let apply = move |_: leptos::ev::MouseEvent| {
        let result = fields.with_value(|f| {
            scraped.with_value(|s| {
                let m = mapping.get_untracked();
                MappingResult {
                    metadata: manual.with_untracked(|v| apply_mapping(s, &m, v, f)),
                    save: save.get_untracked(),
                    backend_mapping: to_backend(&m),
                }
            })
        });
        on_apply.run(result);
        on_close.run(());
    };

    let rows = fields.with_value(|f| f.clone()).into_iter().map(|field| {
        let key_for_target = field.key.clone();
        let key_for_select = field.key.clone();
        let key_for_manual = field.key.clone();
        let key_for_input = field.key.clone();
        let target = move || mapping.with(|m| m.get(&key_for_target).cloned().unwrap_or_default());
        let has_scraped_value = {
            let target = target.clone();
            move || {
                let t = target();
                !t.is_empty() && scraped.with_value(|s| s.contains_key(&t))
            }
        };

        view! {
            <tr class="table__row">
                <td class="table__cell">
                    <strong>{field.label.clone()}</strong>
                    {field.required.then_some(view! { <span class="form__required">" *"</span> })}
                    <div class="table__cell-hint">{field.key.clone()}</div>
                </td>
                <td class="table__cell">"←"</td>
                <td class="table__cell">
                    <select
                        class="select"
                        prop:value=target.clone()
                        on:change=move |ev| {
                            let scraped_key = event_target_value(&ev);
                            let mut m = mapping.get_untracked();
                            let mut v = manual.get_untracked();
                            set_target(&mut m, &mut v, &key_for_select, &scraped_key);
                            mapping.set(m);
                            manual.set(v);
                        }
                    >
                        <option value="">"Not mapped"</option>
                        {scraped.with_value(|s| {
                            s.iter()
                                .map(|(key, value)| {
                                    let label = preview(key, value);
                                    view! { <option value=key.clone()>{label}</option> }
                                })
                                .collect_view()
                        })}
                    </select>
                </td>
                <td class="table__cell">
                    <input
                        type="text"
                        class="input"
                        placeholder="Or type a value"
                        disabled=has_scraped_value
                        prop:value=move || manual.with(|v| v.get(&key_for_manual).cloned().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            manual.update(|v| {
                                v.insert(key_for_input.clone(), value);
                            });
                        }
                    />
                </td>
            </tr>
        }
    }).collect_view();

    view! {
        <Modal title=format!("{} · field mapping", ScrapeUrl::display_name()) on_close=on_close class="modal--wide">
            <p class="modal__hint">
                "Pick the scraped value for each field of this collection. Fields the page did not provide can be typed by hand."
            </p>
            <div class="mapping-stats">
                {move || {
                    let s = stats.get();
                    format!("{} mapped, {} unmapped", s.mapped, s.unmapped)
                }}
            </div>

            <div class="table">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Field"</th>
                            <th class="table__header-cell"></th>
                            <th class="table__header-cell">"Scraped value"</th>
                            <th class="table__header-cell">"Manual value"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>

            <label class="form__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || save.get()
                    on:change=move |ev| save.set(event_target_checked(&ev))
                />
                "Remember this mapping for the collection"
            </label>

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=apply>
                    "Apply"
                </Button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preview_truncates_by_chars() {
        let long = "é".repeat(40);
        let label = preview("summary", &json!(long));
        assert_eq!(label, format!("summary: {}", "é".repeat(30)));
        assert_eq!(preview("pages", &json!(412)), "pages: 412");
    }
}
