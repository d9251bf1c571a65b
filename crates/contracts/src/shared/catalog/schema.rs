//! Field schema resolution: which fields become columns, search scopes and
//! sort keys.

use crate::domain::a001_collection::{Collection, FieldDefinition};

/// Virtual sort key backed by the item's registration timestamp
pub const CREATED_AT_KEY: &str = "created_at";
pub const CREATED_AT_LABEL: &str = "Registration date";

/// Entry of the sort-key selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOption {
    pub key: String,
    pub label: String,
}

/// Read-only view over a collection's ordered field list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogSchema {
    fields: Vec<FieldDefinition>,
}

impl CatalogSchema {
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        Self { fields }
    }

    pub fn from_collection(collection: &Collection) -> Self {
        Self::new(collection.fields().to_vec())
    }

    /// Column and form order
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn label_for(&self, key: &str) -> Option<&str> {
        if key == CREATED_AT_KEY {
            return Some(CREATED_AT_LABEL);
        }
        self.field(key).map(|f| f.label.as_str())
    }

    /// Fields offered as a search scope besides "all"
    pub fn search_scope_options(&self) -> Vec<&FieldDefinition> {
        self.fields.iter().filter(|f| f.is_searchable()).collect()
    }

    /// Sortable fields, without the virtual registration-date key
    pub fn sortable_fields(&self) -> Vec<&FieldDefinition> {
        self.fields.iter().filter(|f| f.is_sortable()).collect()
    }

    /// Sort selector entries: registration date first, then sortable fields
    pub fn sort_key_options(&self) -> Vec<SortOption> {
        std::iter::once(SortOption {
            key: CREATED_AT_KEY.to_string(),
            label: CREATED_AT_LABEL.to_string(),
        })
        .chain(self.sortable_fields().into_iter().map(|f| SortOption {
            key: f.key.clone(),
            label: f.label.clone(),
        }))
        .collect()
    }

    /// Fields rendered on public pages
    pub fn public_fields(&self) -> Vec<&FieldDefinition> {
        self.fields.iter().filter(|f| f.is_public()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_collection::FieldType;

    fn schema() -> CatalogSchema {
        let mut author = FieldDefinition::new("author", "Author", FieldType::Text);
        author.searchable = Some(true);
        let mut year = FieldDefinition::new("year", "Year", FieldType::Number);
        year.sortable = Some(true);
        year.searchable = Some(false);
        let mut notes = FieldDefinition::new("notes", "Notes", FieldType::Textarea);
        notes.show_in_public = Some(false);
        CatalogSchema::new(vec![
            FieldDefinition::new("title", "Title", FieldType::Text),
            author,
            year,
            notes,
        ])
    }

    #[test]
    fn test_sort_options_include_created_at_and_title() {
        let keys: Vec<String> = schema().sort_key_options().into_iter().map(|o| o.key).collect();
        assert_eq!(keys, vec!["created_at", "title", "year"]);
    }

    #[test]
    fn test_unset_sortable_is_not_offered() {
        let s = schema();
        assert!(s.sortable_fields().iter().all(|f| f.key != "author"));
        assert!(s.sortable_fields().iter().all(|f| f.key != "notes"));
    }

    #[test]
    fn test_search_scopes() {
        let s = schema();
        let keys: Vec<&str> = s
            .search_scope_options()
            .into_iter()
            .map(|f| f.key.as_str())
            .collect();
        assert_eq!(keys, vec!["title", "author"]);
    }

    #[test]
    fn test_public_fields_default_visible() {
        let s = schema();
        let keys: Vec<&str> = s
            .public_fields()
            .into_iter()
            .map(|f| f.key.as_str())
            .collect();
        assert_eq!(keys, vec!["title", "author", "year"]);
    }

    #[test]
    fn test_empty_schema_degenerates_to_created_at() {
        let s = CatalogSchema::default();
        assert!(s.is_empty());
        assert!(s.search_scope_options().is_empty());
        assert_eq!(
            s.sort_key_options(),
            vec![SortOption {
                key: CREATED_AT_KEY.into(),
                label: CREATED_AT_LABEL.into()
            }]
        );
    }

    #[test]
    fn test_label_for_virtual_key() {
        let s = schema();
        assert_eq!(s.label_for("created_at"), Some(CREATED_AT_LABEL));
        assert_eq!(s.label_for("year"), Some("Year"));
        assert_eq!(s.label_for("missing"), None);
    }
}
