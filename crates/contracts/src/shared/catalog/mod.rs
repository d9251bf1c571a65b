//! Client-side catalog engine
//!
//! Pure derivations over an already fetched item list:
//!
//! ```rust,ignore
//! use contracts::shared::catalog::{CatalogSchema, SearchScope, SortState, visible_items};
//!
//! let schema = CatalogSchema::from_collection(&collection);
//! let rows = visible_items(&items, "dune", &SearchScope::All, &SortState::default());
//! let layout = ColumnLayout::measure(schema.fields(), &rows);
//! ```
//!
//! Nothing here performs I/O or fails; missing metadata keys and empty schemas
//! have defined fallbacks.

pub mod column_width;
pub mod filter;
pub mod reorder;
pub mod schema;
pub mod selection;
pub mod sort;
pub mod validation;
pub mod value;

pub use column_width::{ColumnLayout, ColumnWidth};
pub use filter::{filter_items, SearchScope};
pub use reorder::{move_field, move_item, move_with_pinned_head};
pub use schema::{CatalogSchema, SortOption, CREATED_AT_KEY, CREATED_AT_LABEL};
pub use selection::{BulkDeleteOutcome, Selection};
pub use sort::{sort_items, SortOrder, SortState};
pub use validation::{validate_metadata, FieldErrors};

use crate::domain::a002_item::Item;

/// Search, then sort: the row set every list and table renders
pub fn visible_items(
    items: &[Item],
    query: &str,
    scope: &SearchScope,
    sort: &SortState,
) -> Vec<Item> {
    let filtered = filter_items(items, query, scope);
    sort_items(&filtered, sort)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_collection::CollectionId;
    use crate::domain::a002_item::{ItemId, Metadata};
    use serde_json::json;

    fn item(id: &str, title: &str, created_at: &str) -> Item {
        let mut metadata = Metadata::new();
        metadata.insert("title".into(), json!(title));
        Item {
            id: ItemId::new(id),
            collection_id: CollectionId(1),
            metadata,
            is_public: true,
            created_at: created_at.into(),
            updated_at: None,
        }
    }

    #[test]
    fn test_visible_items_filters_before_sorting() {
        let items = vec![
            item("1", "Banana bread", "2024-01-01T00:00:00Z"),
            item("2", "Apple pie", "2024-01-02T00:00:00Z"),
            item("3", "Banana split", "2024-01-03T00:00:00Z"),
        ];
        let rows = visible_items(&items, "BANANA", &SearchScope::All, &SortState::default());
        let ids: Vec<&str> = rows.iter().map(|i| i.id.as_str()).collect();
        // default order is newest first
        assert_eq!(ids, vec!["3", "1"]);
    }
}
