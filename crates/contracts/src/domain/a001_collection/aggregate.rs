use serde::{Deserialize, Serialize};

use crate::domain::common::{default_true, AggregateId};

/// Field key that is always offered for search and sort, whatever its flags say.
pub const TITLE_FIELD_KEY: &str = "title";

// ============================================================================
// ID Type
// ============================================================================

/// Backend-assigned numeric identifier of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(pub i64);

impl CollectionId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for CollectionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(CollectionId::new)
            .map_err(|e| format!("Invalid collection id: {}", e))
    }
}

impl std::fmt::Display for CollectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Field schema
// ============================================================================

/// Input widget and value kind of a field.
///
/// Unknown type strings coming from older schemas read as [`FieldType::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FieldType {
    #[default]
    Text,
    Textarea,
    Number,
    Date,
    Select,
    Url,
}

impl FieldType {
    pub const ALL: [FieldType; 6] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Number,
        FieldType::Date,
        FieldType::Select,
        FieldType::Url,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Date => "date",
            Self::Select => "select",
            Self::Url => "url",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Textarea => "Long text",
            Self::Number => "Number",
            Self::Date => "Date",
            Self::Select => "Select",
            Self::Url => "URL",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "textarea" => Self::Textarea,
            "number" => Self::Number,
            "date" => Self::Date,
            "select" => Self::Select,
            "url" => Self::Url,
            _ => Self::Text,
        }
    }
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// One attribute of the items in a collection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub key: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searchable: Option<bool>,
    #[serde(
        rename = "showInPublic",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub show_in_public: Option<bool>,
}

impl FieldDefinition {
    pub fn new(key: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type,
            ..Default::default()
        }
    }

    pub fn is_title(&self) -> bool {
        self.key == TITLE_FIELD_KEY
    }

    /// Offered in the sort-key selector
    pub fn is_sortable(&self) -> bool {
        self.sortable == Some(true) || self.is_title()
    }

    /// Offered in the search-scope selector
    pub fn is_searchable(&self) -> bool {
        self.searchable == Some(true) || self.is_title()
    }

    /// Rendered on public pages (default: yes)
    pub fn is_public(&self) -> bool {
        self.show_in_public != Some(false)
    }

    /// Select options, empty for every other field type
    pub fn select_options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }
}

/// Persisted wrapper around the ordered field list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldDefinitions {
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A user-defined collection (books, board games, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_definitions: Option<FieldDefinitions>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Collection {
    /// Ordered field list; absent schema reads as empty
    pub fn fields(&self) -> &[FieldDefinition] {
        self.field_definitions
            .as_ref()
            .map(|d| d.fields.as_slice())
            .unwrap_or_default()
    }

    pub fn icon_or_default(&self) -> &str {
        self.icon
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("📦")
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Create/update body for a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDto {
    pub name: String,
    /// Omitted when empty so the backend derives one from the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_definitions: Option<FieldDefinitions>,
}

impl CollectionDto {
    pub fn new(
        name: &str,
        slug: &str,
        icon: &str,
        description: &str,
        is_public: bool,
        fields: Vec<FieldDefinition>,
    ) -> Self {
        fn non_empty(s: &str) -> Option<String> {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }

        Self {
            name: name.trim().to_string(),
            slug: non_empty(slug),
            icon: non_empty(icon),
            description: non_empty(description),
            is_public,
            field_definitions: (!fields.is_empty()).then_some(FieldDefinitions { fields }),
        }
    }

    /// Prefill an edit form from an existing collection
    pub fn from_collection(c: &Collection) -> Self {
        Self {
            name: c.name.clone(),
            slug: Some(c.slug.clone()),
            icon: c.icon.clone(),
            description: c.description.clone(),
            is_public: c.is_public,
            field_definitions: c.field_definitions.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Collection name is required".into());
        }
        let mut seen = std::collections::HashSet::new();
        for field in self.field_definitions.iter().flat_map(|d| d.fields.iter()) {
            if field.key.trim().is_empty() {
                return Err(format!("Field \"{}\" has no key", field.label));
            }
            if !seen.insert(field.key.as_str()) {
                return Err(format!("Duplicate field key: {}", field.key));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_reads_backend_json() {
        let json = r#"{
            "id": 7,
            "name": "Books",
            "slug": "books",
            "icon": "📚",
            "created_at": "2024-05-01T10:00:00",
            "field_definitions": {"fields": [
                {"key": "title", "label": "Title", "type": "text", "required": true},
                {"key": "pages", "label": "Pages", "type": "number", "sortable": true},
                {"key": "cover", "label": "Cover", "type": "image", "showInPublic": false}
            ]}
        }"#;
        let c: Collection = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, CollectionId(7));
        assert!(c.is_public);
        assert_eq!(c.fields().len(), 3);
        assert_eq!(c.fields()[1].field_type, FieldType::Number);
        // unknown type falls back to text
        assert_eq!(c.fields()[2].field_type, FieldType::Text);
        assert!(!c.fields()[2].is_public());
    }

    #[test]
    fn test_absent_schema_is_empty() {
        let json = r#"{"id": 1, "name": "Games", "slug": "games"}"#;
        let c: Collection = serde_json::from_str(json).unwrap();
        assert!(c.fields().is_empty());
        assert_eq!(c.icon_or_default(), "📦");
    }

    #[test]
    fn test_title_is_always_offered() {
        let title = FieldDefinition::new("title", "Title", FieldType::Text);
        let author = FieldDefinition::new("author", "Author", FieldType::Text);
        assert!(title.is_sortable());
        assert!(title.is_searchable());
        assert!(!author.is_sortable());
        assert!(!author.is_searchable());
    }

    #[test]
    fn test_field_serializes_camel_case_public_flag() {
        let mut f = FieldDefinition::new("notes", "Notes", FieldType::Textarea);
        f.show_in_public = Some(false);
        let v = serde_json::to_value(&f).unwrap();
        assert_eq!(v["type"], "textarea");
        assert_eq!(v["showInPublic"], false);
        assert!(v.get("sortable").is_none());
    }

    #[test]
    fn test_dto_drops_empty_slug_and_schema() {
        let dto = CollectionDto::new(" Books ", "  ", "", "", true, Vec::new());
        assert_eq!(dto.name, "Books");
        assert!(dto.slug.is_none());
        assert!(dto.field_definitions.is_none());
        let v = serde_json::to_value(&dto).unwrap();
        assert!(v.get("slug").is_none());
    }

    #[test]
    fn test_dto_rejects_duplicate_keys() {
        let fields = vec![
            FieldDefinition::new("title", "Title", FieldType::Text),
            FieldDefinition::new("title", "Name", FieldType::Text),
        ];
        let dto = CollectionDto::new("Books", "", "", "", true, fields);
        assert!(dto.validate().is_err());
    }
}
