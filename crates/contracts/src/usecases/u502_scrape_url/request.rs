use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::mapping::BackendMapping;
use crate::domain::a001_collection::CollectionId;
use crate::domain::a002_item::Metadata;

/// `POST /api/scraper/scrape-url`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeUrlRequest {
    pub url: String,
    pub collection_id: CollectionId,
    /// The mapping dialog applies the mapping client-side, so the form sends `false`
    #[serde(default)]
    pub apply_mapping: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeUrlResponse {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// `POST /api/scraper/save-mapping`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveMappingRequest {
    pub collection_id: CollectionId,
    /// scraped key ⇒ field key
    pub mapping: BackendMapping,
    #[serde(default = "crate::domain::common::default_true")]
    pub ignore_unmapped: bool,
}

/// `GET /api/scraper/get-mapping/{collection_id}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MappingResponse {
    #[serde(default)]
    pub mapping: Option<Value>,
}

impl MappingResponse {
    /// Saved scraped ⇒ field mapping.
    ///
    /// The backend stores `{"mapping": {...}, "ignore_unmapped": bool}` but
    /// older collections hold the flat map directly; both are accepted.
    /// Non-string targets are dropped.
    pub fn backend_mapping(&self) -> BackendMapping {
        let Some(Value::Object(outer)) = &self.mapping else {
            return BackendMapping::new();
        };
        let flat = match outer.get("mapping") {
            Some(Value::Object(inner)) => inner,
            _ => outer,
        };
        flat.iter()
            .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_mapping() {
        let resp: MappingResponse = serde_json::from_value(json!({
            "mapping": {"mapping": {"book_title": "title"}, "ignore_unmapped": true}
        }))
        .unwrap();
        let m = resp.backend_mapping();
        assert_eq!(m.len(), 1);
        assert_eq!(m["book_title"], "title");
    }

    #[test]
    fn test_flat_and_empty_mapping() {
        let resp: MappingResponse =
            serde_json::from_value(json!({"mapping": {"writer": "author", "n": 3}})).unwrap();
        assert_eq!(resp.backend_mapping().len(), 1);
        let empty: MappingResponse = serde_json::from_value(json!({"mapping": {}})).unwrap();
        assert!(empty.backend_mapping().is_empty());
        assert!(MappingResponse::default().backend_mapping().is_empty());
    }

    #[test]
    fn test_scrape_request_json() {
        let req = ScrapeUrlRequest {
            url: "https://example.com/book/1".into(),
            collection_id: CollectionId(3),
            apply_mapping: false,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"url": "https://example.com/book/1", "collection_id": 3, "apply_mapping": false})
        );
    }
}
