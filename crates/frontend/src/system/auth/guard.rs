use leptos::prelude::*;

use super::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Renders its children for the signed-in owner, the login form otherwise
#[component]
pub fn RequireOwner(children: ChildrenFn) -> impl IntoView {
    let state = use_auth();

    view! {
        <Show
            when=move || state.with(|s| s.is_owner())
            fallback=move || {
                if state.with(|s| s.checked) {
                    view! { <LoginPage /> }.into_any()
                } else {
                    view! { <div class="page page--centered">"Checking session..."</div> }.into_any()
                }
            }
        >
            {children()}
        </Show>
    }
}
