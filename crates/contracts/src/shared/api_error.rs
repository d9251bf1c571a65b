use serde::{Deserialize, Serialize};

/// Error body returned by the catalog API and by the gateway.
///
/// The backend reports `detail`, the gateway reports `error`; either may be
/// present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            detail: None,
        }
    }

    /// Human readable message, if the body carried one
    pub fn message(&self) -> Option<String> {
        if let Some(detail) = &self.detail {
            return Some(match detail {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            });
        }
        self.error.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_wins_over_error() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "Not a CSV file", "error": "x"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("Not a CSV file"));
    }

    #[test]
    fn test_structured_detail_is_stringified() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": [{"loc": ["body"]}]}"#).unwrap();
        assert!(body.message().unwrap().contains("loc"));
    }
}
