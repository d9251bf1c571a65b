use gloo_net::http::RequestBuilder;

/// Credentials of the current visitor, passed explicitly to every API call.
///
/// Anonymous sessions reach the public endpoints only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Blank tokens are treated as no token
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: (!token.trim().is_empty()).then_some(token),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Value of the `Authorization` header
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    pub fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header() {
        assert_eq!(
            Session::with_token("abc").authorization().as_deref(),
            Some("Bearer abc")
        );
        assert_eq!(Session::anonymous().authorization(), None);
    }

    #[test]
    fn test_blank_token_is_anonymous() {
        assert!(!Session::with_token("  ").is_authenticated());
        assert_eq!(Session::with_token(""), Session::anonymous());
    }
}
