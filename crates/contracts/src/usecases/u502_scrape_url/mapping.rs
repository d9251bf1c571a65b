//! Reconciliation between scraped keys and a collection's field keys.
//!
//! The dialog edits a [`FieldMapping`] (field key ⇒ scraped key); the backend
//! persists the inverse, a [`BackendMapping`] (scraped key ⇒ field key).

use std::collections::BTreeMap;

use crate::domain::a001_collection::FieldDefinition;
use crate::domain::a002_item::Metadata;

/// field key ⇒ scraped key; an empty target means "not mapped"
pub type FieldMapping = BTreeMap<String, String>;
/// scraped key ⇒ field key
pub type BackendMapping = BTreeMap<String, String>;
/// field key ⇒ value typed by hand for fields the scrape did not provide
pub type ManualValues = BTreeMap<String, String>;

/// Guess a scraped key for every field.
///
/// An exact key match wins; otherwise the first scraped key (in scrape order)
/// whose lower-cased form contains, or is contained in, the field's key or
/// label. Empty strings never match by containment.
pub fn auto_match(scraped: &Metadata, fields: &[FieldDefinition]) -> FieldMapping {
    let mut mapping = FieldMapping::new();
    for field in fields {
        if scraped.contains_key(&field.key) {
            mapping.insert(field.key.clone(), field.key.clone());
            continue;
        }
        let key = field.key.to_lowercase();
        let label = field.label.to_lowercase();
        let similar = scraped.keys().find(|candidate| {
            let candidate = candidate.to_lowercase();
            overlaps(&candidate, &key) || overlaps(&candidate, &label)
        });
        if let Some(similar) = similar {
            mapping.insert(field.key.clone(), similar.clone());
        }
    }
    mapping
}

fn overlaps(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

/// A saved mapping takes precedence over guessing
pub fn initial_mapping(
    saved: &FieldMapping,
    scraped: &Metadata,
    fields: &[FieldDefinition],
) -> FieldMapping {
    if saved.is_empty() {
        auto_match(scraped, fields)
    } else {
        saved.clone()
    }
}

/// Choosing a scraped key for a field discards its manual value
pub fn set_target(
    mapping: &mut FieldMapping,
    manual: &mut ManualValues,
    field_key: &str,
    scraped_key: &str,
) {
    mapping.insert(field_key.to_string(), scraped_key.to_string());
    if !scraped_key.is_empty() {
        manual.remove(field_key);
    }
}

/// Build item metadata: mapped scraped value, else non-empty manual value,
/// else the field stays absent.
pub fn apply_mapping(
    scraped: &Metadata,
    mapping: &FieldMapping,
    manual: &ManualValues,
    fields: &[FieldDefinition],
) -> Metadata {
    let mut metadata = Metadata::new();
    for field in fields {
        let from_scrape = mapping
            .get(&field.key)
            .filter(|k| !k.is_empty())
            .and_then(|k| scraped.get(k));
        if let Some(value) = from_scrape {
            metadata.insert(field.key.clone(), value.clone());
        } else if let Some(value) = manual.get(&field.key).filter(|v| !v.is_empty()) {
            metadata.insert(field.key.clone(), value.clone().into());
        }
    }
    metadata
}

/// Replace the schema fields of a form with freshly mapped values.
///
/// Keys outside the schema survive; schema fields the mapping left empty are
/// cleared.
pub fn merge_scraped(form: &Metadata, mapped: Metadata, fields: &[FieldDefinition]) -> Metadata {
    let mut merged: Metadata = form
        .iter()
        .filter(|(key, _)| !fields.iter().any(|f| &f.key == *key))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    merged.extend(mapped);
    merged
}

/// Invert for persistence; unmapped fields are dropped
pub fn to_backend(mapping: &FieldMapping) -> BackendMapping {
    mapping
        .iter()
        .filter(|(_, scraped)| !scraped.is_empty())
        .map(|(field, scraped)| (scraped.clone(), field.clone()))
        .collect()
}

pub fn from_backend(backend: &BackendMapping) -> FieldMapping {
    backend
        .iter()
        .map(|(scraped, field)| (field.clone(), scraped.clone()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MappingStats {
    pub mapped: usize,
    pub unmapped: usize,
}

impl MappingStats {
    /// A field counts as mapped when it has a scraped target or a manual value
    pub fn compute(fields: &[FieldDefinition], mapping: &FieldMapping, manual: &ManualValues) -> Self {
        let mapped = fields
            .iter()
            .filter(|f| {
                mapping.get(&f.key).is_some_and(|k| !k.is_empty())
                    || manual.get(&f.key).is_some_and(|v| !v.is_empty())
            })
            .count();
        Self {
            mapped,
            unmapped: fields.len() - mapped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_collection::FieldType;
    use serde_json::json;

    fn scraped() -> Metadata {
        let value = json!({
            "title": "Dune",
            "Author Name": "Frank Herbert",
            "publisher": "Chilton",
            "isbn13": "9780441013593"
        });
        match value {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn fields() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("title", "Title", FieldType::Text),
            FieldDefinition::new("writer", "Author", FieldType::Text),
            FieldDefinition::new("isbn", "ISBN", FieldType::Text),
            FieldDefinition::new("shelf", "Shelf", FieldType::Text),
        ]
    }

    #[test]
    fn test_auto_match() {
        let mapping = auto_match(&scraped(), &fields());
        assert_eq!(mapping["title"], "title");
        // label "author" is contained in "author name"
        assert_eq!(mapping["writer"], "Author Name");
        // key "isbn" is contained in "isbn13"
        assert_eq!(mapping["isbn"], "isbn13");
        assert!(!mapping.contains_key("shelf"));
    }

    #[test]
    fn test_empty_label_never_matches() {
        let field = FieldDefinition::new("zzz", "", FieldType::Text);
        assert!(auto_match(&scraped(), &[field]).is_empty());
    }

    #[test]
    fn test_saved_mapping_wins() {
        let saved = FieldMapping::from([("title".to_string(), "publisher".to_string())]);
        assert_eq!(initial_mapping(&saved, &scraped(), &fields()), saved);
        assert_eq!(
            initial_mapping(&FieldMapping::new(), &scraped(), &fields()),
            auto_match(&scraped(), &fields())
        );
    }

    #[test]
    fn test_apply_with_manual_values() {
        let mut mapping = auto_match(&scraped(), &fields());
        let mut manual = ManualValues::new();
        manual.insert("shelf".into(), "B2".into());
        manual.insert("isbn".into(), "typed".into());
        set_target(&mut mapping, &mut manual, "isbn", "isbn13");
        assert!(!manual.contains_key("isbn"));

        let metadata = apply_mapping(&scraped(), &mapping, &manual, &fields());
        assert_eq!(metadata["writer"], "Frank Herbert");
        assert_eq!(metadata["isbn"], "9780441013593");
        assert_eq!(metadata["shelf"], "B2");
        assert!(!metadata.contains_key("publisher"));

        let stats = MappingStats::compute(&fields(), &mapping, &manual);
        assert_eq!(stats, MappingStats { mapped: 4, unmapped: 0 });
    }

    #[test]
    fn test_backend_inversion() {
        let mut mapping = FieldMapping::new();
        mapping.insert("title".into(), "book_title".into());
        mapping.insert("shelf".into(), String::new());
        let backend = to_backend(&mapping);
        assert_eq!(backend.len(), 1);
        assert_eq!(backend["book_title"], "title");
        let back = from_backend(&backend);
        assert_eq!(back["title"], "book_title");
        assert!(!back.contains_key("shelf"));
    }

    #[test]
    fn test_merge_keeps_keys_outside_schema() {
        let mut form = Metadata::new();
        form.insert("title".into(), json!("Old title"));
        form.insert("shelf".into(), json!("A1"));
        form.insert("legacy_note".into(), json!("keep me"));

        let mut mapped = Metadata::new();
        mapped.insert("title".into(), json!("Dune"));

        let merged = merge_scraped(&form, mapped, &fields());
        assert_eq!(merged["title"], "Dune");
        assert_eq!(merged["legacy_note"], "keep me");
        assert!(!merged.contains_key("shelf"));
    }
}
