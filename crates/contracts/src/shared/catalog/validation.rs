//! Required-field check of the item form

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::a001_collection::FieldDefinition;
use crate::domain::a002_item::Metadata;

/// Inline error message per field key
pub type FieldErrors = BTreeMap<String, String>;

/// Missing, null and whitespace-only strings count as blank
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

pub fn validate_metadata(fields: &[FieldDefinition], metadata: &Metadata) -> FieldErrors {
    fields
        .iter()
        .filter(|f| f.required && is_blank(metadata.get(&f.key)))
        .map(|f| (f.key.clone(), format!("{} is required.", f.label)))
        .collect()
}
