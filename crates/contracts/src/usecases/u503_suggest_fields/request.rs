use serde::{Deserialize, Serialize};

use crate::domain::a001_collection::FieldDefinition;

/// `POST /api/ai/suggest-fields`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuggestFieldsRequest {
    pub collection_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// "openai" or "gemini"; the backend default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
}

impl SuggestFieldsRequest {
    /// Request from the collection form; a blank description is left out
    pub fn new(collection_name: &str, description: &str) -> Self {
        let description = description.trim();
        Self {
            collection_name: collection_name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            provider: None,
            model_id: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.collection_name.is_empty() {
            return Err("Enter a collection name first".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SuggestFieldsResponse {
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    /// Provider that answered, shown next to the suggestions
    #[serde(default)]
    pub provider: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_collection::FieldType;

    #[test]
    fn test_request_omits_blank_description() {
        let request = SuggestFieldsRequest::new("  Board games ", "  ");
        assert_eq!(request.collection_name, "Board games");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"collection_name": "Board games"})
        );

        let request = SuggestFieldsRequest::new("Vinyl", "Records I own");
        assert_eq!(request.description.as_deref(), Some("Records I own"));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert!(SuggestFieldsRequest::new("   ", "anything").validate().is_err());
        assert!(SuggestFieldsRequest::new("Vinyl", "").validate().is_ok());
    }

    #[test]
    fn test_response_reads_backend_json() {
        let json = r#"{
            "fields": [
                {"key": "title", "label": "Title", "type": "text", "required": true},
                {"key": "players", "label": "Players", "type": "number", "placeholder": "2-4"},
                {"key": "condition", "label": "Condition", "type": "select", "options": ["new", "used"],
                 "help_text": null}
            ],
            "provider": "gemini"
        }"#;
        let response: SuggestFieldsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.provider, "gemini");
        assert_eq!(response.fields.len(), 3);
        assert!(response.fields[0].required);
        assert_eq!(response.fields[1].field_type, FieldType::Number);
        assert_eq!(response.fields[2].select_options(), ["new", "used"]);
    }
}
