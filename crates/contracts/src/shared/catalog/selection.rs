//! Row selection of the admin item table and the result of a bulk delete

use std::collections::BTreeSet;

use crate::domain::a002_item::{Item, ItemId};

/// Selected item ids, independent of the current search/sort state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.ids.contains(id)
    }

    pub fn set(&mut self, id: &ItemId, checked: bool) {
        if checked {
            self.ids.insert(id.clone());
        } else {
            self.ids.remove(id);
        }
    }

    pub fn toggle(&mut self, id: &ItemId) {
        let checked = !self.contains(id);
        self.set(id, checked);
    }

    /// Header checkbox: replaces the selection with the visible rows, or clears it
    pub fn select_all(&mut self, visible: &[Item], checked: bool) {
        self.ids = if checked {
            visible.iter().map(|i| i.id.clone()).collect()
        } else {
            BTreeSet::new()
        };
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drops ids that are no longer among `items`, e.g. after a refetch
    pub fn retain_visible(&mut self, items: &[Item]) {
        let present: BTreeSet<&ItemId> = items.iter().map(|i| &i.id).collect();
        self.ids.retain(|id| present.contains(id));
    }

    /// Header checkbox state
    pub fn is_all_selected(&self, visible: &[Item]) -> bool {
        !self.ids.is_empty() && self.ids.len() == visible.len()
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.ids.iter().cloned().collect()
    }
}

/// Per-id result of a bulk delete; nothing is rolled back
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkDeleteOutcome {
    pub deleted: Vec<ItemId>,
    pub failed: Vec<(ItemId, String)>,
}

impl BulkDeleteOutcome {
    pub fn record(&mut self, id: ItemId, result: Result<(), String>) {
        match result {
            Ok(()) => self.deleted.push(id),
            Err(e) => self.failed.push((id, e)),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.failed.is_empty() {
            format!("Deleted {} item(s)", self.deleted.len())
        } else {
            format!(
                "Deleted {} item(s), {} failed",
                self.deleted.len(),
                self.failed.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_collection::CollectionId;
    use crate::domain::a002_item::Metadata;

    fn item(id: &str) -> Item {
        Item {
            id: ItemId::new(id),
            collection_id: CollectionId(1),
            metadata: Metadata::new(),
            is_public: true,
            created_at: "2024-01-01T00:00:00Z".into(),
            updated_at: None,
        }
    }

    #[test]
    fn test_select_all_uses_visible_rows_only() {
        let visible = vec![item("a"), item("c")];
        let mut sel = Selection::new();
        sel.set(&ItemId::new("b"), true);
        sel.select_all(&visible, true);
        assert_eq!(sel.ids(), vec![ItemId::new("a"), ItemId::new("c")]);
        assert!(sel.is_all_selected(&visible));
        sel.select_all(&visible, false);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_empty_selection_is_not_all_selected() {
        assert!(!Selection::new().is_all_selected(&[]));
    }

    #[test]
    fn test_toggle() {
        let mut sel = Selection::new();
        let id = ItemId::new("x");
        sel.toggle(&id);
        assert!(sel.contains(&id));
        sel.toggle(&id);
        assert!(!sel.contains(&id));
    }

    #[test]
    fn test_retain_visible_drops_vanished_ids() {
        let mut sel = Selection::new();
        sel.set(&ItemId::new("a"), true);
        sel.set(&ItemId::new("gone"), true);
        sel.retain_visible(&[item("a"), item("b")]);
        assert_eq!(sel.ids(), vec![ItemId::new("a")]);
    }

    #[test]
    fn test_outcome_summary() {
        let mut outcome = BulkDeleteOutcome::default();
        outcome.record(ItemId::new("a"), Ok(()));
        outcome.record(ItemId::new("b"), Err("HTTP 500".into()));
        assert!(!outcome.is_complete());
        assert_eq!(outcome.summary(), "Deleted 1 item(s), 1 failed");
    }
}
