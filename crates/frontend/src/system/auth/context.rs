use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::session::Session;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Session,
    pub user_info: Option<UserInfo>,
    /// The stored token has been checked against `/api/auth/me`
    pub checked: bool,
}

impl AuthState {
    pub fn is_owner(&self) -> bool {
        self.session.is_authenticated() && self.user_info.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let state = RwSignal::new(AuthState {
        session: storage::get_access_token()
            .map(Session::with_token)
            .unwrap_or_default(),
        ..AuthState::default()
    });

    // Validate the restored token once
    spawn_local(async move {
        let session = state.with_untracked(|s| s.session.clone());
        if !session.is_authenticated() {
            state.update(|s| s.checked = true);
            return;
        }
        match api::get_current_user(&session).await {
            Ok(user_info) => state.update(|s| {
                s.user_info = Some(user_info);
                s.checked = true;
            }),
            Err(e) => {
                log::warn!("Stored token rejected: {}", e);
                storage::clear_tokens();
                state.set(AuthState {
                    checked: true,
                    ..AuthState::default()
                });
            }
        }
    });

    provide_context(state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Session of the current visitor, anonymous when signed out
pub fn use_session() -> Signal<Session> {
    let state = use_auth();
    Signal::derive(move || state.with(|s| s.session.clone()))
}

/// Helper: Perform login
pub async fn do_login(state: RwSignal<AuthState>, id_token: String) -> Result<(), String> {
    let response = api::login_with_google(id_token).await?;
    storage::save_access_token(&response.access_token);
    state.set(AuthState {
        session: Session::with_token(response.access_token),
        user_info: Some(response.user),
        checked: true,
    });
    Ok(())
}

pub fn do_logout(state: RwSignal<AuthState>) {
    storage::clear_tokens();
    state.set(AuthState {
        checked: true,
        ..AuthState::default()
    });
}
