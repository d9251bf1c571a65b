//! Bulk delete of the selected items

use std::future::Future;

use contracts::domain::a002_item::ItemId;
use contracts::shared::catalog::BulkDeleteOutcome;
use futures::future::join_all;

/// Fires one delete per id, all at once, and waits for every answer.
///
/// Failures are collected, never retried, and do not undo the deletes that
/// went through.
pub async fn delete_all<F, Fut>(ids: Vec<ItemId>, delete: F) -> BulkDeleteOutcome
where
    F: Fn(ItemId) -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    let requests = ids.iter().cloned().map(&delete);
    let results = join_all(requests).await;

    let mut outcome = BulkDeleteOutcome::default();
    for (id, result) in ids.into_iter().zip(results) {
        if let Err(e) = &result {
            log::error!("Bulk delete of {} failed: {}", id, e);
        }
        outcome.record(id, result);
    }
    outcome
}

/// Text of the alert shown after a partially failed bulk delete
pub fn failure_report(outcome: &BulkDeleteOutcome) -> Option<String> {
    if outcome.is_complete() {
        return None;
    }
    let lines: Vec<String> = outcome
        .failed
        .iter()
        .map(|(id, e)| format!("{}: {}", id, e))
        .collect();
    Some(format!("{}\n\n{}", outcome.summary(), lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_collection::CollectionId;
    use contracts::domain::a002_item::{Item, Metadata};
    use contracts::shared::catalog::Selection;
    use futures::executor::block_on;
    use std::cell::RefCell;

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
    fn test_one_rejected_delete_leaves_survivor() {
        // Server-side list, mutated by the fake delete endpoint
        let store = RefCell::new(vec![item("a"), item("b"), item("c"), item("d")]);
        let mut selection = Selection::new();
        for id in ["a", "b", "c"] {
            selection.set(&ItemId::new(id), true);
        }

        let outcome = block_on(delete_all(selection.ids(), |id| {
            let store = &store;
            async move {
                if id.as_str() == "b" {
                    return Err("HTTP 500".to_string());
                }
                store.borrow_mut().retain(|i| i.id != id);
                Ok(())
            }
        }));

        assert_eq!(outcome.deleted, vec![ItemId::new("a"), ItemId::new("c")]);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].0, ItemId::new("b"));

        // refetch + clear
        selection.clear();
        let refetched: Vec<String> = store.borrow().iter().map(|i| i.id.0.clone()).collect();
        assert_eq!(refetched, vec!["b", "d"]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_failure_report() {
        let mut outcome = BulkDeleteOutcome::default();
        outcome.record(ItemId::new("a"), Ok(()));
        assert_eq!(failure_report(&outcome), None);

        outcome.record(ItemId::new("b"), Err("Failed to delete the item: HTTP 403".into()));
        let report = failure_report(&outcome).unwrap();
        assert!(report.starts_with("Deleted 1 item(s), 1 failed"));
        assert!(report.contains("b: Failed to delete the item: HTTP 403"));
    }

    #[test]
    fn test_nothing_selected() {
        let outcome = block_on(delete_all(Vec::new(), |_| async { Ok(()) }));
        assert!(outcome.is_complete());
        assert!(outcome.deleted.is_empty());
    }
}
