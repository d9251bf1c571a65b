use contracts::domain::a001_collection::Collection;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

use crate::domain::a001_collection::api;
use crate::system::auth::context::{use_auth, use_session};

/// Public landing page: one card per public collection
#[component]
pub fn PublicHome() -> impl IntoView {
    let auth = use_auth();
    let session = use_session();
    let (collections, set_collections) = signal(Vec::<Collection>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match api::fetch_collections(&session.get_untracked()).await {
            Ok(list) => set_collections.set(list.into_iter().filter(|c| c.is_public).collect()),
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    view! {
        <div class="page page--public">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Collections"</h1>
                </div>
                <div class="header__actions">
                    {move || if auth.with(|s| s.is_owner()) {
                        view! { <a class="button button--secondary" href="/admin">"Administration"</a> }.into_any()
                    } else {
                        view! { <a class="button button--secondary" href="/admin">"Sign in"</a> }.into_any()
                    }}
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading"><Spinner /></div> }
            >
                <Show
                    when=move || !collections.with(|c| c.is_empty())
                    fallback=|| view! { <p class="page__empty">"Nothing to show yet."</p> }
                >
                    <div class="card-grid">
                        {move || collections.get().into_iter().map(|c| {
                            let href = format!("/collections/{}", c.slug);
                            view! {
                                <a class="card" href=href>
                                    <div class="card__icon">{c.icon_or_default().to_string()}</div>
                                    <div class="card__title">{c.name.clone()}</div>
                                    {c.description.clone().map(|d| view! { <p class="card__description">{d}</p> })}
                                </a>
                            }
                        }).collect_view()}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
