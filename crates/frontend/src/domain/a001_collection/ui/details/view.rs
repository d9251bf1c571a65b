use contracts::domain::a001_collection::Collection;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Spinner};

use super::field_editor::FieldEditor;
use super::view_model::{CollectionDetailsViewModel, EMOJI_CHOICES};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_session;
use crate::usecases::u503_suggest_fields::FieldSuggestionPanel;

/// Create/edit dialog of a collection and its field schema
#[component]
pub fn CollectionDetails(
    collection: Option<Collection>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let vm = CollectionDetailsViewModel::new(collection.as_ref());
    // the suggestion panel takes the field editor's place while open
    let suggesting = RwSignal::new(false);
    let title = if vm.is_edit_mode() {
        "Edit collection"
    } else {
        "New collection"
    };

    let save = move |_: leptos::ev::MouseEvent| {
        vm.save(
            session.get_untracked(),
            Callback::new(move |_saved: Collection| on_saved.run(())),
        );
    };

    view! {
        <Modal title=title on_close=on_close class="modal--wide">
            {move || vm.error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <div class="form">
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label" for="collection-name">"Name *"</label>
                        <input
                            id="collection-name"
                            type="text"
                            class="input"
                            placeholder="Books"
                            prop:value=move || vm.name.get()
                            on:input=move |ev| vm.name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="collection-slug">"Slug"</label>
                        <input
                            id="collection-slug"
                            type="text"
                            class="input"
                            placeholder="Generated from the name when empty"
                            prop:value=move || vm.slug.get()
                            on:input=move |ev| vm.slug.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form__group">
                    <span class="form__label">"Icon"</span>
                    <div class="emoji-picker">
                        {EMOJI_CHOICES
                            .iter()
                            .map(|emoji| {
                                let emoji = emoji.to_string();
                                let value = emoji.clone();
                                let current = emoji.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="emoji-picker__choice"
                                        class:emoji-picker__choice--active=move || vm.icon.with(|i| *i == current)
                                        on:click=move |_| vm.icon.set(value.clone())
                                    >
                                        {emoji}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="form__group">
                    <label class="form__label" for="collection-description">"Description"</label>
                    <textarea
                        id="collection-description"
                        class="textarea"
                        rows="3"
                        prop:value=move || vm.description.get()
                        on:input=move |ev| vm.description.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || vm.is_public.get()
                        on:change=move |ev| vm.is_public.set(event_target_checked(&ev))
                    />
                    "Visible on the public catalog"
                </label>

                {move || if suggesting.get() {
                    view! {
                        <FieldSuggestionPanel
                            collection_name=vm.name.get_untracked()
                            description=vm.description.get_untracked()
                            fields=vm.fields
                            on_close=Callback::new(move |_| suggesting.set(false))
                        />
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="form__actions">
                            <button
                                type="button"
                                class="button button--secondary"
                                title="Needs a collection name"
                                disabled=move || vm.name.with(|n| n.trim().is_empty())
                                on:click=move |_| suggesting.set(true)
                            >
                                {icon("zap")}
                                "Suggest fields"
                            </button>
                        </div>
                        <FieldEditor fields=vm.fields />
                    }
                    .into_any()
                }}
            </div>

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.is_saving
                    on_click=save
                >
                    <Show when=move || vm.is_saving.get()>
                        <Spinner />
                    </Show>
                    "Save"
                </Button>
            </div>
        </Modal>
    }
}
