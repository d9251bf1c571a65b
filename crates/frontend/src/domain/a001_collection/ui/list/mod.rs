use contracts::domain::a001_collection::Collection;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, ButtonSize, Spinner, Table,
    TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

use crate::domain::a001_collection::api;
use crate::domain::a001_collection::ui::details::CollectionDetails;
use crate::shared::browser::{alert, confirm};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

/// Which dialog is open over the list
#[derive(Clone, Debug, PartialEq)]
enum Editing {
    Closed,
    New,
    Existing(Collection),
}

#[component]
pub fn CollectionList() -> impl IntoView {
    let session = use_session();
    let (collections, set_collections) = signal(Vec::<Collection>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let editing = RwSignal::new(Editing::Closed);

    let fetch = move || {
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_collections(&session.get_untracked()).await {
                Ok(list) => {
                    set_collections.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    fetch();

    let delete = move |collection: Collection| {
        let message = format!(
            "Delete collection \"{}\" and all of its items? This cannot be undone.",
            collection.name
        );
        if !confirm(&message) {
            return;
        }
        spawn_local(async move {
            match api::delete_collection(&session.get_untracked(), collection.id).await {
                Ok(()) => fetch(),
                Err(e) => alert(&e),
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        editing.set(Editing::Closed);
        fetch();
    });
    let on_close = Callback::new(move |_| editing.set(Editing::Closed));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <a class="header__back" href="/admin">"← Administration"</a>
                    <h1 class="header__title">"Collections"</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Editing::New)>
                        {icon("plus")}
                        "New collection"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading"><Spinner /></div> }
            >
                <Show
                    when=move || !collections.with(|c| c.is_empty())
                    fallback=|| view! { <p class="page__empty">"No collections yet."</p> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=200.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Slug"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Fields"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Visibility"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || collections.get().into_iter().map(|c| {
                                let items_href = format!("/admin/collections/{}/items", c.slug);
                                let icon_text = c.icon_or_default().to_string();
                                let name = c.name.clone();
                                let slug = c.slug.clone();
                                let field_count = c.fields().len();
                                let is_public = c.is_public;
                                let for_edit = c.clone();
                                let for_delete = c;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{icon_text}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a class="table__link" href=items_href>{name}</a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{slug}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{field_count}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {if is_public {
                                                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Public"</Badge> }.into_any()
                                                } else {
                                                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>"Private"</Badge> }.into_any()
                                                }}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Editing::Existing(for_edit.clone()))
                                                >
                                                    {icon("edit")}
                                                    "Edit"
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete(for_delete.clone())
                                                >
                                                    {icon("delete")}
                                                    "Delete"
                                                </Button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </Show>
            </Show>

            {move || {
                let collection = match editing.get() {
                    Editing::Closed => return None,
                    Editing::New => None,
                    Editing::Existing(c) => Some(c),
                };
                Some(view! {
                    <CollectionDetails collection=collection on_saved=on_saved on_close=on_close />
                })
            }}
        </div>
    }
}
