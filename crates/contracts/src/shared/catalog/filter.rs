//! Case-insensitive substring search over item metadata

use super::value::display;
use crate::domain::a002_item::Item;

/// Where a query is looked for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SearchScope {
    /// Any metadata value
    #[default]
    All,
    /// Only the value under this field key
    Field(String),
}

impl SearchScope {
    /// Selector value of [`SearchScope::All`]
    pub const ALL_VALUE: &'static str = "all";

    pub fn from_value(value: &str) -> Self {
        if value.is_empty() || value == Self::ALL_VALUE {
            Self::All
        } else {
            Self::Field(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            Self::All => Self::ALL_VALUE,
            Self::Field(key) => key,
        }
    }
}

/// Whether `item` matches an already lower-cased needle
pub fn matches(item: &Item, needle: &str, scope: &SearchScope) -> bool {
    match scope {
        SearchScope::All => item
            .metadata
            .values()
            .any(|v| display(v).to_lowercase().contains(needle)),
        SearchScope::Field(key) => item
            .metadata
            .get(key)
            .is_some_and(|v| display(v).to_lowercase().contains(needle)),
    }
}

/// Items matching `query` in `scope`, in their original order.
///
/// An empty query returns every item.
pub fn filter_items(items: &[Item], query: &str, scope: &SearchScope) -> Vec<Item> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches(item, &needle, scope))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_collection::CollectionId;
    use crate::domain::a002_item::{ItemId, Metadata};
    use serde_json::{json, Value};

    fn item(id: &str, pairs: &[(&str, Value)]) -> Item {
        let metadata: Metadata = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        Item {
            id: ItemId::new(id),
            collection_id: CollectionId(1),
            metadata,
            is_public: true,
            created_at: "2024-01-01T00:00:00Z".into(),
            updated_at: None,
        }
    }

    fn fruit() -> Vec<Item> {
        vec![
            item("b", &[("title", json!("Banana"))]),
            item("a", &[("title", json!("Apple"))]),
        ]
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_all_scope_substring() {
        let found = filter_items(&fruit(), "ban", &SearchScope::All);
        assert_eq!(ids(&found), vec!["b"]);
    }

    #[test]
    fn test_case_insensitive() {
        let found = filter_items(&fruit(), "APP", &SearchScope::All);
        assert_eq!(ids(&found), vec!["a"]);
    }

    #[test]
    fn test_empty_query_is_identity() {
        let items = fruit();
        assert_eq!(filter_items(&items, "", &SearchScope::All), items);
        assert_eq!(
            filter_items(&items, "", &SearchScope::Field("nope".into())),
            items
        );
    }

    #[test]
    fn test_idempotent() {
        let items = vec![
            item("1", &[("title", json!("Dune")), ("year", json!(1965))]),
            item("2", &[("title", json!("Dune Messiah")), ("year", json!(1969))]),
            item("3", &[("title", json!("Emma"))]),
        ];
        for (q, scope) in [
            ("dune", SearchScope::All),
            ("196", SearchScope::All),
            ("9", SearchScope::Field("year".into())),
            ("zzz", SearchScope::All),
        ] {
            let once = filter_items(&items, q, &scope);
            let twice = filter_items(&once, q, &scope);
            assert_eq!(once, twice, "query {q:?}");
        }
    }

    #[test]
    fn test_field_scope_ignores_other_fields() {
        let items = vec![
            item("1", &[("title", json!("Red")), ("author", json!("Blue"))]),
            item("2", &[("title", json!("Blue")), ("author", json!("Green"))]),
        ];
        let found = filter_items(&items, "blue", &SearchScope::Field("title".into()));
        assert_eq!(ids(&found), vec!["2"]);
    }

    #[test]
    fn test_field_scope_missing_key_never_matches() {
        let items = vec![item("1", &[("title", json!("x"))])];
        let found = filter_items(&items, "x", &SearchScope::Field("author".into()));
        assert!(found.is_empty());
    }

    #[test]
    fn test_numbers_and_booleans_searchable_as_text() {
        let items = vec![
            item("1", &[("pages", json!(412))]),
            item("2", &[("read", json!(true))]),
        ];
        assert_eq!(ids(&filter_items(&items, "41", &SearchScope::All)), vec!["1"]);
        assert_eq!(ids(&filter_items(&items, "tru", &SearchScope::All)), vec!["2"]);
    }

    #[test]
    fn test_scope_value_round_trip() {
        assert_eq!(SearchScope::from_value("all"), SearchScope::All);
        assert_eq!(
            SearchScope::from_value("author"),
            SearchScope::Field("author".into())
        );
        assert_eq!(SearchScope::Field("author".into()).as_value(), "author");
    }
}
