pub mod state;

use contracts::domain::a001_collection::{Collection, CollectionId, FieldDefinition, FieldType};
use contracts::domain::a002_item::Item;
use contracts::shared::catalog::value::{cell_text, display_opt, format_date};
use contracts::shared::catalog::{
    visible_items, CatalogSchema, ColumnLayout, SearchScope, CREATED_AT_KEY, CREATED_AT_LABEL,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, ButtonSize, Spinner};

use self::state::{create_state, persist_state, ItemListState};
use crate::domain::a001_collection::api as collection_api;
use crate::domain::a002_item::ui::details::ItemModal;
use crate::domain::a002_item::{api, bulk};
use crate::shared::browser::{alert, confirm};
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, SearchScopeSelect};
use crate::shared::session::Session;
use crate::system::auth::context::use_session;
use crate::usecases::u501_bulk_import::BulkImportModal;

#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Closed,
    NewItem,
    EditItem(Item),
    BulkImport,
}

/// Rebuild the item store from the API; the selection keeps surviving ids only
async fn reload_items(
    session: Session,
    collection_id: CollectionId,
    items: RwSignal<Vec<Item>>,
    state: RwSignal<ItemListState>,
) {
    match api::fetch_items(&session, collection_id).await {
        Ok(list) => {
            state.update(|s| {
                s.selection.retain_visible(&list);
                s.is_loaded = true;
            });
            items.set(list);
        }
        Err(e) => alert(&e),
    }
}

fn cell_view(field: &FieldDefinition, item: &Item) -> AnyView {
    let text = cell_text(item.value(&field.key));
    if field.field_type == FieldType::Url && text != "-" {
        let href = text.clone();
        view! {
            <a
                class="table__link"
                href=href
                target="_blank"
                rel="noopener noreferrer"
                on:click=|e| e.stop_propagation()
            >
                {text}
            </a>
        }
        .into_any()
    } else {
        view! { <span>{text}</span> }.into_any()
    }
}

/// Admin table of one collection's items
#[component]
pub fn ItemManager() -> impl IntoView {
    let params = use_params_map();
    let slug = params.with_untracked(|p| p.get("slug").unwrap_or_default());
    let session = use_session();

    let collection = RwSignal::new(None::<Collection>);
    let items = RwSignal::new(Vec::<Item>::new());
    let state = create_state(&slug);
    let (error, set_error) = signal(None::<String>);
    let dialog = RwSignal::new(Dialog::Closed);
    let slug = StoredValue::new(slug);

    let schema = Memo::new(move |_| {
        collection.with(|c| c.as_ref().map(CatalogSchema::from_collection).unwrap_or_default())
    });
    // selection changes do not re-run search and sort
    let view_params = Memo::new(move |_| {
        state.with(|s| (s.query.clone(), s.scope.clone(), s.sort.clone()))
    });
    let visible = Memo::new(move |_| {
        view_params.with(|(query, scope, sort)| {
            items.with(|list| visible_items(list, query, scope, sort))
        })
    });
    let layout = Memo::new(move |_| {
        schema.with(|s| visible.with(|v| ColumnLayout::measure(s.fields(), v)))
    });

    Effect::new(move |_| {
        view_params.track();
        slug.with_value(|s| persist_state(s, state));
    });

    spawn_local(async move {
        let session_now = session.get_untracked();
        match collection_api::fetch_collection_by_slug(&session_now, &slug.get_value()).await {
            Ok(c) => {
                let id = c.id;
                state.update(|s| s.sanitize(&CatalogSchema::from_collection(&c)));
                collection.set(Some(c));
                reload_items(session_now, id, items, state).await;
            }
            Err(e) => set_error.set(Some(e)),
        }
    });

    let collection_id = move || collection.with_untracked(|c| c.as_ref().map(|c| c.id));

    let refetch = move || {
        if let Some(id) = collection_id() {
            spawn_local(reload_items(session.get_untracked(), id, items, state));
        }
    };

    let delete_one = move |item: Item| {
        let title = display_opt(item.value("title"));
        let message = if title.is_empty() {
            "Delete this item?".to_string()
        } else {
            format!("Delete \"{}\"?", title)
        };
        if !confirm(&message) {
            return;
        }
        let session_now = session.get_untracked();
        spawn_local(async move {
            match api::delete_item(&session_now, item.collection_id, &item.id).await {
                Ok(()) => reload_items(session_now, item.collection_id, items, state).await,
                Err(e) => alert(&e),
            }
        });
    };

    let delete_selected = move || {
        let ids = state.with_untracked(|s| s.selection.ids());
        let Some(collection_id) = collection_id() else {
            return;
        };
        if ids.is_empty() {
            return;
        }
        let message = format!("Delete {} selected item(s)? This cannot be undone.", ids.len());
        if !confirm(&message) {
            return;
        }
        let session_now = session.get_untracked();
        spawn_local(async move {
            let outcome = bulk::delete_all(ids, |id| {
                let session = session_now.clone();
                async move { api::delete_item(&session, collection_id, &id).await }
            })
            .await;
            log::info!("{}", outcome.summary());
            state.update(|s| s.selection.clear());
            reload_items(session_now, collection_id, items, state).await;
            if let Some(report) = bulk::failure_report(&outcome) {
                alert(&report);
            }
        });
    };

    let on_sort = Callback::new(move |key: String| state.update(|s| s.sort.toggle(&key)));
    let sort = Signal::derive(move || state.with(|s| s.sort.clone()));

    let scope_options = Signal::derive(move || {
        schema.with(|s| {
            s.search_scope_options()
                .into_iter()
                .map(|f| (f.key.clone(), f.label.clone()))
                .collect::<Vec<_>>()
        })
    });

    let header = move || {
        let layout = layout.get();
        schema
            .get()
            .fields()
            .iter()
            .map(|f| {
                let style = layout.width_for(&f.key).style();
                if f.is_sortable() {
                    view! {
                        <SortableHeaderCell
                            label=f.label.clone()
                            sort_key=f.key.clone()
                            sort=sort
                            on_sort=on_sort
                            style=style
                        />
                    }
                    .into_any()
                } else {
                    view! { <th class="table__header-cell" style=style>{f.label.clone()}</th> }
                        .into_any()
                }
            })
            .collect_view()
    };

    let row = move |item: Item| {
        let layout = layout.get_untracked();
        let id_for_checked = item.id.clone();
        let id_for_change = item.id.clone();
        let for_edit = item.clone();
        let for_delete = item.clone();
        let cells = schema.with_untracked(|s| {
            s.fields()
                .iter()
                .map(|f| {
                    let style = layout.width_for(&f.key).style();
                    view! { <td class="table__cell" style=style>{cell_view(f, &item)}</td> }
                })
                .collect_view()
        });

        view! {
            <tr
                class="table__row"
                on:click=move |_| dialog.set(Dialog::EditItem(for_edit.clone()))
            >
                <TableCheckbox
                    checked=Signal::derive(move || state.with(|s| s.selection.contains(&id_for_checked)))
                    on_change=Callback::new(move |checked| {
                        state.update(|s| s.selection.set(&id_for_change, checked))
                    })
                />
                {cells}
                <td class="table__cell">{format_date(&item.created_at)}</td>
                <td class="table__cell">
                    {if item.is_public {
                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Public"</Badge> }.into_any()
                    } else {
                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>"Private"</Badge> }.into_any()
                    }}
                </td>
                <td class="table__cell" on:click=|e| e.stop_propagation()>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| delete_one(for_delete.clone())
                    >
                        {icon("delete")}
                    </Button>
                </td>
            </tr>
        }
    };

    let on_saved = Callback::new(move |_| {
        dialog.set(Dialog::Closed);
        refetch();
    });
    let on_close = Callback::new(move |_| dialog.set(Dialog::Closed));
    let on_import_closed = Callback::new(move |changed: bool| {
        dialog.set(Dialog::Closed);
        if changed {
            refetch();
        }
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <a class="header__back" href="/admin/collections">"← Collections"</a>
                    <h1 class="header__title">
                        {move || collection.with(|c| {
                            c.as_ref()
                                .map(|c| format!("{} {}", c.icon_or_default(), c.name))
                                .unwrap_or_default()
                        })}
                    </h1>
                    <span class="header__subtitle">
                        {move || {
                            let shown = visible.with(|v| v.len());
                            let total = items.with(|i| i.len());
                            format!("{} of {} item(s)", shown, total)
                        }}
                    </span>
                </div>
                <div class="header__actions">
                    <Show when=move || state.with(|s| !s.selection.is_empty())>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| delete_selected()>
                            {icon("delete")}
                            {move || format!("Delete selected ({})", state.with(|s| s.selection.len()))}
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || collection.with(|c| c.is_none()))
                        on_click=move |_| dialog.set(Dialog::BulkImport)
                    >
                        {icon("upload")}
                        "Import CSV"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || collection.with(|c| c.is_none()))
                        on_click=move |_| dialog.set(Dialog::NewItem)
                    >
                        {icon("plus")}
                        "New item"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.query.clone()))
                    on_change=Callback::new(move |q: String| state.update(|s| s.query = q))
                    placeholder="Search items..."
                />
                <SearchScopeSelect
                    options=scope_options
                    scope=Signal::derive(move || state.with(|s| s.scope.clone()))
                    on_change=Callback::new(move |scope: SearchScope| state.update(|s| s.scope = scope))
                />
            </div>

            <Show
                when=move || state.with(|s| s.is_loaded)
                fallback=move || view! {
                    {move || error.get().is_none().then(|| view! { <div class="page__loading"><Spinner /></div> })}
                }
            >
                <div class="table">
                    <table class="table__data">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell table__header-cell--checkbox">
                                    <input
                                        type="checkbox"
                                        class="table__checkbox"
                                        prop:checked=move || {
                                            visible.with(|v| state.with(|s| s.selection.is_all_selected(v)))
                                        }
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            visible.with_untracked(|v| {
                                                state.update(|s| s.selection.select_all(v, checked))
                                            });
                                        }
                                    />
                                </th>
                                {header}
                                <SortableHeaderCell
                                    label=CREATED_AT_LABEL
                                    sort_key=CREATED_AT_KEY
                                    sort=sort
                                    on_sort=on_sort
                                />
                                <th class="table__header-cell">"Visibility"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || visible.get().into_iter().map(row).collect_view()}
                        </tbody>
                    </table>
                    <Show when=move || visible.with(|v| v.is_empty())>
                        <p class="page__empty">
                            {move || if items.with(|i| i.is_empty()) {
                                "No items yet."
                            } else {
                                "No items match the search."
                            }}
                        </p>
                    </Show>
                </div>
            </Show>

            {move || {
                let current = collection.get()?;
                match dialog.get() {
                    Dialog::Closed => None,
                    Dialog::NewItem => Some(view! {
                        <ItemModal collection=current item=None on_saved=on_saved on_close=on_close />
                    }.into_any()),
                    Dialog::EditItem(item) => Some(view! {
                        <ItemModal collection=current item=Some(item) on_saved=on_saved on_close=on_close />
                    }.into_any()),
                    Dialog::BulkImport => Some(view! {
                        <BulkImportModal collection_id=current.id on_close=on_import_closed />
                    }.into_any()),
                }
            }}
        </div>
    }
}
