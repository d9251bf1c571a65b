use contracts::domain::a001_collection::{Collection, CollectionId, FieldDefinition, FieldType};
use contracts::domain::a002_item::{Item, ItemCreateRequest, ItemId, ItemUpdateRequest, Metadata};
use contracts::shared::catalog::{validate_metadata, FieldErrors};
use contracts::usecases::u502_scrape_url::{from_backend, merge_scraped, FieldMapping};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Number, Value};

use crate::domain::a002_item::api;
use crate::shared::browser::alert;
use crate::shared::session::Session;
use crate::usecases::u502_scrape_url::api as scrape_api;
use crate::usecases::u502_scrape_url::view::MappingResult;

/// Metadata value for a raw form input; `None` clears the field.
///
/// Number inputs store numbers when the text parses, anything else is kept
/// verbatim as a string.
pub fn input_value(field_type: FieldType, raw: &str) -> Option<Value> {
    if raw.trim().is_empty() {
        return None;
    }
    if field_type == FieldType::Number {
        let trimmed = raw.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Some(Value::from(i));
        }
        if let Some(n) = trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
            return Some(Value::Number(n));
        }
    }
    Some(Value::String(raw.to_string()))
}

/// Data handed to the mapping dialog after a successful scrape
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMapping {
    pub scraped: Metadata,
    pub saved: FieldMapping,
}

#[derive(Clone, Copy)]
pub struct ItemDetailsViewModel {
    pub collection_id: CollectionId,
    pub fields: StoredValue<Vec<FieldDefinition>>,
    pub item_id: StoredValue<Option<ItemId>>,
    pub metadata: RwSignal<Metadata>,
    pub is_public: RwSignal<bool>,
    pub errors: RwSignal<FieldErrors>,
    pub is_saving: RwSignal<bool>,
    pub url: RwSignal<String>,
    pub is_scraping: RwSignal<bool>,
    pub pending_mapping: RwSignal<Option<PendingMapping>>,
}

impl ItemDetailsViewModel {
    pub fn new(collection: &Collection, item: Option<&Item>) -> Self {
        Self {
            collection_id: collection.id,
            fields: StoredValue::new(collection.fields().to_vec()),
            item_id: StoredValue::new(item.map(|i| i.id.clone())),
            metadata: RwSignal::new(item.map(|i| i.metadata.clone()).unwrap_or_default()),
            is_public: RwSignal::new(item.map(|i| i.is_public).unwrap_or(true)),
            errors: RwSignal::new(FieldErrors::new()),
            is_saving: RwSignal::new(false),
            url: RwSignal::new(String::new()),
            is_scraping: RwSignal::new(false),
            pending_mapping: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.item_id.with_value(|id| id.is_some())
    }

    /// Editing a field clears its inline error
    pub fn set_value(&self, field: &FieldDefinition, raw: &str) {
        let value = input_value(field.field_type, raw);
        self.metadata.update(|m| match value {
            Some(v) => {
                m.insert(field.key.clone(), v);
            }
            None => {
                m.remove(&field.key);
            }
        });
        self.errors.update(|e| {
            e.remove(&field.key);
        });
    }

    pub fn validate(&self) -> bool {
        let errors = self
            .fields
            .with_value(|f| self.metadata.with_untracked(|m| validate_metadata(f, m)));
        let ok = errors.is_empty();
        self.errors.set(errors);
        ok
    }

    /// Validation errors block the request entirely
    pub fn save(&self, session: Session, on_saved: Callback<()>) {
        if !self.validate() {
            return;
        }
        self.is_saving.set(true);

        let collection_id = self.collection_id;
        let item_id = self.item_id.get_value();
        let metadata = self.metadata.get_untracked();
        let is_public = self.is_public.get_untracked();
        let is_saving = self.is_saving;
        spawn_local(async move {
            let result = match item_id {
                Some(id) => {
                    let request = ItemUpdateRequest { metadata, is_public };
                    api::update_item(&session, collection_id, &id, &request).await
                }
                None => {
                    let request = ItemCreateRequest {
                        collection_id,
                        metadata,
                        is_public,
                    };
                    api::create_item(&session, &request).await
                }
            };
            is_saving.set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => alert(&e),
            }
        });
    }

    /// Scrape the URL and open the mapping dialog with the saved mapping
    pub fn scrape(&self, session: Session) {
        let url = self.url.get_untracked();
        if url.trim().is_empty() {
            alert("Please enter a URL.");
            return;
        }
        self.is_scraping.set(true);

        let collection_id = self.collection_id;
        let is_scraping = self.is_scraping;
        let pending = self.pending_mapping;
        spawn_local(async move {
            // A missing or broken saved mapping falls back to auto-matching
            let saved = match scrape_api::get_mapping(&session, collection_id).await {
                Ok(backend) => from_backend(&backend),
                Err(e) => {
                    log::warn!("No saved mapping for collection {}: {}", collection_id, e);
                    FieldMapping::new()
                }
            };
            let result = scrape_api::scrape_url(&session, collection_id, &url).await;
            is_scraping.set(false);
            match result {
                Ok(response) => pending.set(Some(PendingMapping {
                    scraped: response.metadata,
                    saved,
                })),
                Err(e) => alert(&e),
            }
        });
    }

    /// Fill the form from the mapping dialog; saving the mapping is best-effort
    pub fn apply_mapping_result(&self, session: Session, result: MappingResult) {
        let merged = self.fields.with_value(|f| {
            self.metadata
                .with_untracked(|m| merge_scraped(m, result.metadata, f))
        });
        self.metadata.set(merged);
        self.errors.set(FieldErrors::new());

        if result.save {
            let collection_id = self.collection_id;
            spawn_local(async move {
                if let Err(e) =
                    scrape_api::save_mapping(&session, collection_id, result.backend_mapping).await
                {
                    log::error!("{}", e);
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_input_parses() {
        assert_eq!(input_value(FieldType::Number, " 412 "), Some(json!(412)));
        assert_eq!(input_value(FieldType::Number, "4.5"), Some(json!(4.5)));
        assert_eq!(input_value(FieldType::Number, "n/a"), Some(json!("n/a")));
    }

    #[test]
    fn test_blank_input_clears() {
        assert_eq!(input_value(FieldType::Text, "   "), None);
        assert_eq!(input_value(FieldType::Date, ""), None);
    }

    #[test]
    fn test_text_kept_verbatim() {
        assert_eq!(input_value(FieldType::Text, " Dune "), Some(json!(" Dune ")));
        assert_eq!(input_value(FieldType::Select, "used"), Some(json!("used")));
    }
}
