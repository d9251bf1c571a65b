use std::collections::HashSet;

use contracts::domain::a001_collection::{Collection, FieldDefinition};
use contracts::domain::a002_item::Item;
use contracts::shared::catalog::value::{cell_text, format_date};
use contracts::shared::catalog::{
    visible_items, CatalogSchema, SearchScope, SortState, CREATED_AT_LABEL,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::Spinner;

use crate::domain::a001_collection::api as collection_api;
use crate::domain::a002_item::api;
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, SortControls};
use crate::system::auth::context::use_session;

/// Values longer than this collapse behind "Show more" in grid cards
pub const LONG_VALUE_CHARS: usize = 100;

pub fn is_long_value(text: &str) -> bool {
    text.chars().count() > LONG_VALUE_CHARS
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum ViewMode {
    #[default]
    Grid,
    List,
}

#[component]
fn ItemCard(item: Item, fields: Vec<FieldDefinition>) -> impl IntoView {
    let expanded = RwSignal::new(HashSet::<String>::new());

    let entries = fields
        .into_iter()
        .map(|field| {
            let text = cell_text(item.value(&field.key));
            let body = if is_long_value(&text) {
                let key = field.key.clone();
                let is_open = {
                    let key = key.clone();
                    move || expanded.with(|e| e.contains(&key))
                };
                let is_open_label = is_open.clone();
                view! {
                    <div class="item-card__value" class:item-card__value--clamped=move || !is_open()>
                        {text}
                    </div>
                    <button
                        type="button"
                        class="item-card__toggle"
                        on:click=move |_| expanded.update(|e| {
                            if !e.remove(&key) {
                                e.insert(key.clone());
                            }
                        })
                    >
                        {move || if is_open_label() { "Show less ▲" } else { "Show more ▼" }}
                    </button>
                }
                .into_any()
            } else {
                view! { <div class="item-card__value">{text}</div> }.into_any()
            };
            view! {
                <div class="item-card__entry">
                    <dt class="item-card__label">{field.label.clone()}</dt>
                    <dd>{body}</dd>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="item-card">
            <dl>
                {entries}
                <div class="item-card__entry">
                    <dt class="item-card__label">{CREATED_AT_LABEL}</dt>
                    <dd class="item-card__value">{format_date(&item.created_at)}</dd>
                </div>
            </dl>
        </div>
    }
}

/// Public page of one collection
#[component]
pub fn CollectionBrowser() -> impl IntoView {
    let params = use_params_map();
    let slug = params.with_untracked(|p| p.get("slug").unwrap_or_default());
    let session = use_session();

    let collection = RwSignal::new(None::<Collection>);
    let items = RwSignal::new(Vec::<Item>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let query = RwSignal::new(String::new());
    let sort = RwSignal::new(SortState::default());
    let mode = RwSignal::new(ViewMode::default());

    spawn_local(async move {
        let session_now = session.get_untracked();
        let loaded = match collection_api::fetch_collection_by_slug(&session_now, &slug).await {
            Ok(c) if c.is_public || session_now.is_authenticated() => {
                let id = c.id;
                collection.set(Some(c));
                api::fetch_items(&session_now, id).await
            }
            Ok(_) => Err(format!("Collection not found: {}", slug)),
            Err(e) => Err(e),
        };
        match loaded {
            Ok(list) => items.set(list.into_iter().filter(|i| i.is_public).collect()),
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    let schema = Memo::new(move |_| {
        collection.with(|c| c.as_ref().map(CatalogSchema::from_collection).unwrap_or_default())
    });
    let public_fields = Memo::new(move |_| {
        schema.with(|s| s.public_fields().into_iter().cloned().collect::<Vec<_>>())
    });
    let visible = Memo::new(move |_| {
        let q = query.get();
        sort.with(|s| items.with(|list| visible_items(list, &q, &SearchScope::All, s)))
    });

    let list_view = move || {
        let fields = public_fields.get();
        let header = fields
            .iter()
            .map(|f| view! { <th class="table__header-cell">{f.label.clone()}</th> })
            .collect_view();
        let rows = visible
            .get()
            .into_iter()
            .map(|item| {
                let cells = fields
                    .iter()
                    .map(|f| {
                        let text = cell_text(item.value(&f.key));
                        let title = text.clone();
                        view! {
                            <td class="table__cell">
                                <div class="table__cell-truncate" title=title>{text}</div>
                            </td>
                        }
                    })
                    .collect_view();
                view! {
                    <tr class="table__row">
                        {cells}
                        <td class="table__cell">{format_date(&item.created_at)}</td>
                    </tr>
                }
            })
            .collect_view();
        view! {
            <div class="table">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            {header}
                            <th class="table__header-cell">{CREATED_AT_LABEL}</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        }
    };

    let grid_view = move || {
        let fields = public_fields.get();
        view! {
            <div class="card-grid">
                {visible
                    .get()
                    .into_iter()
                    .map(|item| view! { <ItemCard item=item fields=fields.clone() /> })
                    .collect_view()}
            </div>
        }
    };

    view! {
        <div class="page page--public">
            <div class="header">
                <div class="header__content">
                    <a class="header__back" href="/">"← All collections"</a>
                    <h1 class="header__title">
                        {move || collection.with(|c| {
                            c.as_ref()
                                .map(|c| format!("{} {}", c.icon_or_default(), c.name))
                                .unwrap_or_default()
                        })}
                    </h1>
                    {move || collection.with(|c| {
                        c.as_ref()
                            .and_then(|c| c.description.clone())
                            .map(|d| view! { <p class="header__subtitle">{d}</p> })
                    })}
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <div class="filter-bar">
                <SearchInput
                    value=query
                    on_change=Callback::new(move |q: String| query.set(q))
                    placeholder="Search..."
                />
                <SortControls
                    options=Signal::derive(move || schema.with(|s| s.sort_key_options()))
                    sort=sort
                    on_key=Callback::new(move |key: String| sort.update(|s| s.toggle(&key)))
                    on_flip=Callback::new(move |_| sort.update(|s| s.flip_order()))
                />
                <div class="view-toggle">
                    <button
                        class="button button--icon"
                        class:button--active=move || mode.get() == ViewMode::Grid
                        title="Grid"
                        on:click=move |_| mode.set(ViewMode::Grid)
                    >
                        {icon("grid")}
                    </button>
                    <button
                        class="button button--icon"
                        class:button--active=move || mode.get() == ViewMode::List
                        title="List"
                        on:click=move |_| mode.set(ViewMode::List)
                    >
                        {icon("list")}
                    </button>
                </div>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading"><Spinner /></div> }
            >
                <Show
                    when=move || !visible.with(|v| v.is_empty())
                    fallback=move || view! {
                        <p class="page__empty">
                            {move || if query.with(|q| q.is_empty()) {
                                "No items yet."
                            } else {
                                "No items match the search."
                            }}
                        </p>
                    }
                >
                    {move || match mode.get() {
                        ViewMode::Grid => grid_view().into_any(),
                        ViewMode::List => list_view().into_any(),
                    }}
                </Show>
            </Show>

            <div class="page__footer">
                <a class="button button--secondary" href="/admin">"Administration"</a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_value_threshold() {
        assert!(!is_long_value(&"a".repeat(100)));
        assert!(is_long_value(&"a".repeat(101)));
        // counted in characters, not bytes
        assert!(!is_long_value(&"가".repeat(100)));
    }
}
