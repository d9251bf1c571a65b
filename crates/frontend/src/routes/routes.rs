use crate::domain::a001_collection::ui::list::CollectionList;
use crate::domain::a001_collection::ui::public::PublicHome;
use crate::domain::a002_item::ui::list::ItemManager;
use crate::domain::a002_item::ui::public::CollectionBrowser;
use crate::system::auth::guard::RequireOwner;
use crate::system::pages::admin::AdminHome;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h1 class="header__title">"Page not found"</h1>
            <a class="button button--secondary" href="/">"Back to the catalog"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PublicHome />
                <Route path=path!("/collections/:slug") view=CollectionBrowser />
                <Route
                    path=path!("/admin")
                    view=|| view! { <RequireOwner><AdminHome /></RequireOwner> }
                />
                <Route
                    path=path!("/admin/collections")
                    view=|| view! { <RequireOwner><CollectionList /></RequireOwner> }
                />
                <Route
                    path=path!("/admin/collections/:slug/items")
                    view=|| view! { <RequireOwner><ItemManager /></RequireOwner> }
                />
            </Routes>
        </Router>
    }
}
