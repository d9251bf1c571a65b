use contracts::system::auth::{GoogleAuthRequest, TokenResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ensure_ok};
use crate::shared::session::Session;

/// Exchange a Google ID token for an owner access token
pub async fn login_with_google(id_token: String) -> Result<TokenResponse, String> {
    let request = GoogleAuthRequest { token: id_token };

    let response = Request::post(&api_url("/api/auth/google"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(response, "sign in")
        .await?
        .json::<TokenResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Current owner, or an error when the session token is missing or rejected
pub async fn get_current_user(session: &Session) -> Result<UserInfo, String> {
    let response = session
        .authorize(Request::get(&api_url("/api/auth/me")))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(response, "load the current user")
        .await?
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
