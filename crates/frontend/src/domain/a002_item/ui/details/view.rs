use contracts::domain::a001_collection::{Collection, FieldDefinition, FieldType};
use contracts::domain::a002_item::Item;
use contracts::shared::catalog::value::display_opt;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Spinner};

use super::view_model::ItemDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_session;
use crate::usecases::u502_scrape_url::FieldMappingModal;

/// Input widget of one field, bound to the form metadata
fn field_input(vm: ItemDetailsViewModel, field: FieldDefinition) -> impl IntoView {
    let key = field.key.clone();
    let value = move || vm.metadata.with(|m| display_opt(m.get(&key)));
    let has_error = {
        let key = field.key.clone();
        move || vm.errors.with(|e| e.contains_key(&key))
    };
    let placeholder = field.placeholder.clone().unwrap_or_default();
    let field = StoredValue::new(field);
    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        field.with_value(|f| vm.set_value(f, &raw));
    };

    match field.with_value(|f| f.field_type) {
        FieldType::Textarea => view! {
            <textarea
                class="textarea"
                class:input--error=has_error
                rows="4"
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        FieldType::Select => {
            let options = field.with_value(|f| f.select_options().to_vec());
            view! {
                <select class="select" class:input--error=has_error prop:value=value on:change=on_input>
                    <option value="">"Select..."</option>
                    {options
                        .into_iter()
                        .map(|o| {
                            let label = o.clone();
                            view! { <option value=o>{label}</option> }
                        })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        other => {
            let input_type = match other {
                FieldType::Number => "number",
                FieldType::Date => "date",
                FieldType::Url => "url",
                _ => "text",
            };
            view! {
                <input
                    type=input_type
                    class="input"
                    class:input--error=has_error
                    placeholder=placeholder
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any()
        }
    }
}

/// Create/edit dialog of an item, with optional filling from a product URL
#[component]
pub fn ItemModal(
    collection: Collection,
    item: Option<Item>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let vm = ItemDetailsViewModel::new(&collection, item.as_ref());
    let title = if vm.is_edit_mode() {
        format!("Edit item · {}", collection.name)
    } else {
        format!("New item · {}", collection.name)
    };
    let fields = collection.fields().to_vec();
    let mapping_fields = fields.clone();

    let form = if fields.is_empty() {
        view! {
            <p class="form__help">"This collection has no fields. Add some in the collection settings."</p>
        }
        .into_any()
    } else {
        let rows = fields
            .into_iter()
            .map(|field| {
                let key = field.key.clone();
                let error = move || vm.errors.with(|e| e.get(&key).cloned());
                let label = field.label.clone();
                let required = field.required;
                let help = field.help_text.clone();
                view! {
                    <div class="form__group">
                        <label class="form__label">
                            {label}
                            {required.then_some(view! { <span class="form__required">" *"</span> })}
                        </label>
                        {field_input(vm, field)}
                        {help.map(|h| view! { <div class="form__help">{h}</div> })}
                        {move || error().map(|e| view! { <div class="form__error">{e}</div> })}
                    </div>
                }
            })
            .collect_view();
        view! { <div class="form">{rows}</div> }.into_any()
    };

    view! {
        <Modal title=title on_close=on_close class="modal--wide">
            <div class="scrape-bar">
                <span class="scrape-bar__icon">{icon("link")}</span>
                <input
                    type="url"
                    class="input"
                    placeholder="https://... product page to fill the form from"
                    prop:value=move || vm.url.get()
                    on:input=move |ev| vm.url.set(event_target_value(&ev))
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=vm.is_scraping
                    on_click=move |_| vm.scrape(session.get_untracked())
                >
                    <Show when=move || vm.is_scraping.get()>
                        <Spinner />
                    </Show>
                    "Fill from URL"
                </Button>
            </div>

            {form}

            <label class="form__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || vm.is_public.get()
                    on:change=move |ev| vm.is_public.set(event_target_checked(&ev))
                />
                "Visible on the public catalog"
            </label>

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.is_saving
                    on_click=move |_| vm.save(session.get_untracked(), on_saved)
                >
                    <Show when=move || vm.is_saving.get()>
                        <Spinner />
                    </Show>
                    "Save"
                </Button>
            </div>
        </Modal>

        {move || vm.pending_mapping.get().map(|pending| {
            view! {
                <FieldMappingModal
                    scraped=pending.scraped
                    fields=mapping_fields.clone()
                    saved=pending.saved
                    on_apply=Callback::new(move |result| {
                        vm.apply_mapping_result(session.get_untracked(), result)
                    })
                    on_close=Callback::new(move |_| vm.pending_mapping.set(None))
                />
            }
        })}
    }
}
