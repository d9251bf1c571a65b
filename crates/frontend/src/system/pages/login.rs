use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{do_login, use_auth};

/// Owner sign-in: a Google ID token is exchanged for a catalog access token
#[component]
pub fn LoginPage() -> impl IntoView {
    let (id_token, set_id_token) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let state = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let token = id_token.get().trim().to_string();
        if token.is_empty() {
            set_error_message.set(Some("Paste a Google ID token first".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            if let Err(e) = do_login(state, token).await {
                set_error_message.set(Some(e));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Collection Catalog"</h1>
                <h2>"Owner sign-in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="id_token">"Google ID token"</label>
                        <textarea
                            id="id_token"
                            rows="4"
                            prop:value=move || id_token.get()
                            on:input=move |ev| set_id_token.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>
                    <button type="submit" class="button button--primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <a class="login-box__back" href="/">"Back to the catalog"</a>
            </div>
        </div>
    }
}
