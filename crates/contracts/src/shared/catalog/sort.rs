//! Stable, type-aware ordering of items by one key

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::schema::CREATED_AT_KEY;
use super::value::{compare, parse_timestamp};
use crate::domain::a002_item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == Self::Asc
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Asc => "Ascending",
            Self::Desc => "Descending",
        }
    }
}

/// Current sort key and direction of a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: String,
    pub order: SortOrder,
}

impl Default for SortState {
    /// Newest registrations first
    fn default() -> Self {
        Self {
            key: CREATED_AT_KEY.to_string(),
            order: SortOrder::Desc,
        }
    }
}

impl SortState {
    pub fn new(key: impl Into<String>, order: SortOrder) -> Self {
        Self {
            key: key.into(),
            order,
        }
    }

    /// Header click / selector change: the same key flips direction, a new
    /// key starts ascending.
    pub fn toggle(&mut self, key: &str) {
        if self.key == key {
            self.order = self.order.toggled();
        } else {
            self.key = key.to_string();
            self.order = SortOrder::Asc;
        }
    }

    pub fn flip_order(&mut self) {
        self.order = self.order.toggled();
    }

    /// Arrow for a column header, empty when the column is not the sort key
    pub fn indicator(&self, key: &str) -> &'static str {
        if self.key == key {
            self.order.arrow()
        } else {
            ""
        }
    }
}

/// Ascending comparison of two items under `key`
pub fn compare_items(a: &Item, b: &Item, key: &str) -> Ordering {
    if key == CREATED_AT_KEY {
        parse_timestamp(&a.created_at).cmp(&parse_timestamp(&b.created_at))
    } else {
        compare(a.metadata.get(key), b.metadata.get(key))
    }
}

/// New sequence ordered by `state`; ties keep their input order.
pub fn sort_items(items: &[Item], state: &SortState) -> Vec<Item> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let cmp = compare_items(a, b, &state.key);
        if state.order.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_collection::CollectionId;
    use crate::domain::a002_item::{ItemId, Metadata};
    use serde_json::{json, Value};

    fn item(id: &str, created_at: &str, pairs: &[(&str, Value)]) -> Item {
        let metadata: Metadata = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        Item {
            id: ItemId::new(id),
            collection_id: CollectionId(1),
            metadata,
            is_public: true,
            created_at: created_at.into(),
            updated_at: None,
        }
    }

    fn titles(items: &[Item]) -> Vec<String> {
        items
            .iter()
            .map(|i| super::super::value::display_opt(i.value("title")))
            .collect()
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn fruit() -> Vec<Item> {
        vec![
            item("b", "2024-01-01T00:00:00Z", &[("title", json!("Banana"))]),
            item("a", "2024-01-02T00:00:00Z", &[("title", json!("Apple"))]),
        ]
    }

    #[test]
    fn test_title_ascending_and_descending() {
        let items = fruit();
        let asc = sort_items(&items, &SortState::new("title", SortOrder::Asc));
        assert_eq!(titles(&asc), vec!["Apple", "Banana"]);
        let desc = sort_items(&items, &SortState::new("title", SortOrder::Desc));
        assert_eq!(titles(&desc), vec!["Banana", "Apple"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let items = fruit();
        let _ = sort_items(&items, &SortState::new("title", SortOrder::Asc));
        assert_eq!(titles(&items), vec!["Banana", "Apple"]);
    }

    #[test]
    fn test_created_at_compares_as_timestamp() {
        let items = vec![
            // lexically larger, chronologically earlier
            item("old", "2024-01-02T05:00:00+09:00", &[]),
            item("new", "2024-01-01T23:00:00Z", &[]),
        ];
        let asc = sort_items(&items, &SortState::new(CREATED_AT_KEY, SortOrder::Asc));
        assert_eq!(ids(&asc), vec!["old", "new"]);
        let desc = sort_items(&items, &SortState::default());
        assert_eq!(ids(&desc), vec!["new", "old"]);
    }

    #[test]
    fn test_missing_value_sorts_first_ascending() {
        let items = vec![
            item("1", "2024-01-01T00:00:00Z", &[("title", json!("Apple"))]),
            item("2", "2024-01-01T00:00:00Z", &[]),
            item("3", "2024-01-01T00:00:00Z", &[("title", json!("Cherry"))]),
        ];
        let asc = sort_items(&items, &SortState::new("title", SortOrder::Asc));
        assert_eq!(ids(&asc), vec!["2", "1", "3"]);
        let desc = sort_items(&items, &SortState::new("title", SortOrder::Desc));
        assert_eq!(ids(&desc), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_stable_for_ties_in_both_directions() {
        let items = vec![
            item("1", "2024-01-01T00:00:00Z", &[("shelf", json!("A"))]),
            item("2", "2024-01-01T00:00:00Z", &[("shelf", json!("B"))]),
            item("3", "2024-01-01T00:00:00Z", &[("shelf", json!("A"))]),
            item("4", "2024-01-01T00:00:00Z", &[("shelf", json!("B"))]),
        ];
        let asc = sort_items(&items, &SortState::new("shelf", SortOrder::Asc));
        assert_eq!(ids(&asc), vec!["1", "3", "2", "4"]);
        let desc = sort_items(&items, &SortState::new("shelf", SortOrder::Desc));
        assert_eq!(ids(&desc), vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_desc_is_reverse_of_asc_without_ties() {
        let items = vec![
            item("1", "2024-01-01T00:00:00Z", &[("pages", json!(300))]),
            item("2", "2024-01-01T00:00:00Z", &[("pages", json!(12))]),
            item("3", "2024-01-01T00:00:00Z", &[("pages", json!(1200))]),
            item("4", "2024-01-01T00:00:00Z", &[("pages", json!(45.5))]),
        ];
        let mut asc = sort_items(&items, &SortState::new("pages", SortOrder::Asc));
        assert_eq!(ids(&asc), vec!["2", "4", "1", "3"]);
        asc.reverse();
        let desc = sort_items(&items, &SortState::new("pages", SortOrder::Desc));
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_mixed_numbers_and_strings_under_one_key() {
        let items = vec![
            item("1", "2024-01-01T00:00:00Z", &[("year", json!(1999))]),
            item("2", "2024-01-01T00:00:00Z", &[("year", json!("1965"))]),
            item("3", "2024-01-01T00:00:00Z", &[("year", json!(9))]),
            item("4", "2024-01-01T00:00:00Z", &[]),
            item("5", "2024-01-01T00:00:00Z", &[("year", json!("unknown"))]),
            item("6", "2024-01-01T00:00:00Z", &[("year", json!(100))]),
        ];
        let mut asc = sort_items(&items, &SortState::new("year", SortOrder::Asc));
        assert_eq!(ids(&asc), vec!["4", "3", "6", "1", "2", "5"]);
        asc.reverse();
        let desc = sort_items(&items, &SortState::new("year", SortOrder::Desc));
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_many_mixed_values_sort_without_panic() {
        let items: Vec<Item> = (0..400)
            .map(|n| {
                let value = if n % 3 == 0 {
                    json!(((n * 37) % 101).to_string())
                } else {
                    json!((n * 53) % 211)
                };
                item(&n.to_string(), "2024-01-01T00:00:00Z", &[("pages", value)])
            })
            .collect();
        let asc = sort_items(&items, &SortState::new("pages", SortOrder::Asc));
        assert_eq!(asc.len(), 400);
        for pair in asc.windows(2) {
            assert_ne!(
                compare_items(&pair[0], &pair[1], "pages"),
                Ordering::Greater
            );
        }
    }

    #[test]
    fn test_toggle_semantics() {
        let mut state = SortState::default();
        state.toggle("title");
        assert_eq!(state, SortState::new("title", SortOrder::Asc));
        state.toggle("title");
        assert_eq!(state.order, SortOrder::Desc);
        state.toggle("title");
        assert_eq!(state.order, SortOrder::Asc);
        state.toggle("year");
        assert_eq!(state, SortState::new("year", SortOrder::Asc));
    }

    #[test]
    fn test_double_toggle_restores_order() {
        let items = fruit();
        let mut state = SortState::new("title", SortOrder::Asc);
        let before = sort_items(&items, &state);
        state.toggle("title");
        state.toggle("title");
        assert_eq!(sort_items(&items, &state), before);
    }

    #[test]
    fn test_indicator() {
        let state = SortState::new("title", SortOrder::Desc);
        assert_eq!(state.indicator("title"), "↓");
        assert_eq!(state.indicator("year"), "");
    }
}
