use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::a001_collection::CollectionId;
use crate::domain::common::{default_true, AggregateId};

/// Open attribute map of an item, keyed by field key.
///
/// Keys outside the current schema are kept so that a full-replace update
/// does not drop them.
pub type Metadata = serde_json::Map<String, Value>;

// ============================================================================
// ID Type
// ============================================================================

/// Opaque document id assigned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for ItemId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        String::from_string(s).map(ItemId)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id", alias = "id")]
    pub id: ItemId,
    pub collection_id: CollectionId,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default = "default_true")]
    pub is_public: bool,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Item {
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }
}

// ============================================================================
// Requests
// ============================================================================

/// POST /api/items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCreateRequest {
    pub collection_id: CollectionId,
    pub metadata: Metadata,
    pub is_public: bool,
}

/// PUT /api/items/{collection_id}/{item_id}; always the complete metadata map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemUpdateRequest {
    pub metadata: Metadata,
    pub is_public: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_reads_mongo_id() {
        let v = json!({
            "_id": "65f0c",
            "collection_id": 3,
            "metadata": {"title": "Dune", "legacy": 1},
            "created_at": "2024-03-15T14:02:26.123Z"
        });
        let item: Item = serde_json::from_value(v).unwrap();
        assert_eq!(item.id.as_str(), "65f0c");
        assert!(item.is_public);
        assert_eq!(item.value("title"), Some(&json!("Dune")));
    }

    #[test]
    fn test_unknown_metadata_keys_round_trip() {
        let v = json!({
            "_id": "a",
            "collection_id": 1,
            "metadata": {"title": "X", "not_in_schema": [1, 2]},
            "is_public": false,
            "created_at": "2024-01-01T00:00:00"
        });
        let item: Item = serde_json::from_value(v.clone()).unwrap();
        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["metadata"], v["metadata"]);
        assert_eq!(back["_id"], "a");
    }
}
