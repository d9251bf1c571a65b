//! Folding suggested field definitions into the form's field list

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::a001_collection::{FieldDefinition, FieldType};

/// How accepted suggestions meet the fields already in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyMode {
    /// The suggestions become the whole schema
    #[default]
    Replace,
    /// Suggestions with a key not yet in the form go after the existing fields
    Append,
}

/// Suggestions fit for the field editor.
///
/// Rows without a key are dropped and a repeated key keeps its first row.
/// Keys and labels are trimmed, and options survive only on select fields.
pub fn clean_suggestions(suggested: &[FieldDefinition]) -> Vec<FieldDefinition> {
    let mut seen = HashSet::new();
    suggested
        .iter()
        .filter_map(|field| {
            let key = field.key.trim();
            if key.is_empty() || !seen.insert(key.to_string()) {
                return None;
            }
            let mut field = field.clone();
            field.key = key.to_string();
            field.label = match field.label.trim() {
                "" => field.key.clone(),
                label => label.to_string(),
            };
            if field.field_type != FieldType::Select {
                field.options = None;
            }
            Some(field)
        })
        .collect()
}

/// New field list after accepting `suggested` under `mode`
pub fn apply_suggestions(
    current: &[FieldDefinition],
    suggested: &[FieldDefinition],
    mode: ApplyMode,
) -> Vec<FieldDefinition> {
    let cleaned = clean_suggestions(suggested);
    match mode {
        ApplyMode::Replace => cleaned,
        ApplyMode::Append => {
            let existing: HashSet<&str> = current.iter().map(|f| f.key.trim()).collect();
            let mut fields = current.to_vec();
            fields.extend(
                cleaned
                    .into_iter()
                    .filter(|f| !existing.contains(f.key.as_str())),
            );
            fields
        }
    }
}
