use contracts::shared::catalog::{CatalogSchema, SearchScope, Selection, SortState};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const STORAGE_KEY_PREFIX: &str = "a002_item_list_state_v1";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct PersistedState {
    pub query: String,
    pub scope: String,
    pub sort: SortState,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemListState {
    // filters
    pub query: String,
    pub scope: SearchScope,

    // client sorting
    pub sort: SortState,

    pub selection: Selection,
    pub is_loaded: bool,
}

impl ItemListState {
    /// Drop a scope or sort key the collection's schema no longer offers
    pub fn sanitize(&mut self, schema: &CatalogSchema) {
        if let SearchScope::Field(key) = &self.scope {
            if !schema.search_scope_options().iter().any(|f| &f.key == key) {
                self.scope = SearchScope::All;
            }
        }
        if !schema.sort_key_options().iter().any(|o| o.key == self.sort.key) {
            self.sort = SortState::default();
        }
    }
}

fn storage_key(slug: &str) -> String {
    format!("{}:{}", STORAGE_KEY_PREFIX, slug)
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_persisted(slug: &str) -> Option<PersistedState> {
    let raw = storage()?.get_item(&storage_key(slug)).ok().flatten()?;
    serde_json::from_str::<PersistedState>(&raw).ok()
}

fn save_persisted(slug: &str, st: &PersistedState) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(st) else { return };
    let _ = storage.set_item(&storage_key(slug), &raw);
}

pub fn persist_state(slug: &str, signal: RwSignal<ItemListState>) {
    let persisted = signal.with_untracked(|st| PersistedState {
        query: st.query.clone(),
        scope: st.scope.as_value().to_string(),
        sort: st.sort.clone(),
    });
    save_persisted(slug, &persisted);
}

pub fn create_state(slug: &str) -> RwSignal<ItemListState> {
    let mut st = ItemListState::default();
    if let Some(p) = load_persisted(slug) {
        st.query = p.query;
        st.scope = SearchScope::from_value(&p.scope);
        st.sort = p.sort;
    }
    RwSignal::new(st)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_collection::{FieldDefinition, FieldType};
    use contracts::shared::catalog::SortOrder;

    fn schema() -> CatalogSchema {
        let mut year = FieldDefinition::new("year", "Year", FieldType::Number);
        year.sortable = Some(true);
        CatalogSchema::new(vec![FieldDefinition::new("title", "Title", FieldType::Text), year])
    }

    #[test]
    fn test_sanitize_resets_removed_keys() {
        let mut st = ItemListState {
            scope: SearchScope::Field("publisher".into()),
            sort: SortState::new("publisher", SortOrder::Asc),
            ..ItemListState::default()
        };
        st.sanitize(&schema());
        assert_eq!(st.scope, SearchScope::All);
        assert_eq!(st.sort, SortState::default());
    }

    #[test]
    fn test_sanitize_keeps_offered_keys() {
        let mut st = ItemListState {
            query: "dune".into(),
            scope: SearchScope::Field("title".into()),
            sort: SortState::new("year", SortOrder::Desc),
            ..ItemListState::default()
        };
        let before = st.clone();
        st.sanitize(&schema());
        assert_eq!(st, before);
    }
}
