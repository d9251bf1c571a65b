use serde::{Deserialize, Serialize};

/// `POST /api/auth/google`: exchange a Google ID token for an owner access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleAuthRequest {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: UserInfo,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// `GET /api/auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
    #[serde(default)]
    pub name: String,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}
