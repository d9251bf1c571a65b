use contracts::domain::a001_collection::Collection;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_collection::api;
use crate::system::auth::context::{do_logout, use_auth, use_session};

/// Admin landing page: signed-in owner and a shortcut per collection
#[component]
pub fn AdminHome() -> impl IntoView {
    let state = use_auth();
    let session = use_session();
    let (collections, set_collections) = signal(Vec::<Collection>::new());
    let (error, set_error) = signal(Option::<String>::None);

    spawn_local(async move {
        match api::fetch_collections(&session.get_untracked()).await {
            Ok(list) => set_collections.set(list),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Administration"</h1>
                    <span class="header__subtitle">
                        {move || state.with(|s| {
                            s.user_info.as_ref().map(|u| format!("Signed in as {}", u.display_name())).unwrap_or_default()
                        })}
                    </span>
                </div>
                <div class="header__actions">
                    <a class="button button--primary" href="/admin/collections">"Manage collections"</a>
                    <a class="button button--secondary" href="/">"Public catalog"</a>
                    <button class="button button--secondary" on:click=move |_| do_logout(state)>
                        "Sign out"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <div class="card-grid">
                {move || collections.get().into_iter().map(|c| {
                    let href = format!("/admin/collections/{}/items", c.slug);
                    view! {
                        <a class="card" href=href>
                            <div class="card__icon">{c.icon_or_default().to_string()}</div>
                            <div class="card__title">{c.name.clone()}</div>
                            <div class="card__meta">
                                {format!("{} field(s)", c.fields().len())}
                                {(!c.is_public).then_some(" · private")}
                            </div>
                        </a>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
