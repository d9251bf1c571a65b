//! Per-field column width buckets derived from observed content length.
//!
//! Measured once per field whenever the visible row set changes, never per cell.

use std::collections::HashMap;

use super::value::display;
use crate::domain::a001_collection::FieldDefinition;
use crate::domain::a002_item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnWidth {
    /// up to 10 characters
    #[default]
    Minimum,
    /// 11..=50
    Moderate,
    /// 51..=100
    Wide,
    /// more than 100
    VeryWide,
}

impl ColumnWidth {
    pub fn for_length(len: usize) -> Self {
        match len {
            0..=10 => Self::Minimum,
            11..=50 => Self::Moderate,
            51..=100 => Self::Wide,
            _ => Self::VeryWide,
        }
    }

    pub fn min_px(self) -> u32 {
        match self {
            Self::Minimum => 150,
            Self::Moderate => 300,
            Self::Wide => 450,
            Self::VeryWide => 750,
        }
    }

    pub fn max_px(self) -> Option<u32> {
        match self {
            Self::Minimum => None,
            Self::Moderate => Some(450),
            Self::Wide => Some(750),
            Self::VeryWide => Some(9000),
        }
    }

    /// Inline CSS for the cells of this column
    pub fn style(self) -> String {
        match self.max_px() {
            Some(max) => format!("min-width: {}px; max-width: {}px;", self.min_px(), max),
            None => format!("min-width: {}px;", self.min_px()),
        }
    }
}

/// Longest of the label and every row's value for `field`, in characters
pub fn max_display_length(field: &FieldDefinition, items: &[Item]) -> usize {
    items
        .iter()
        .map(|item| {
            item.metadata
                .get(&field.key)
                .map(|v| display(v).chars().count())
                .unwrap_or(0)
        })
        .fold(field.label.chars().count(), usize::max)
}

/// Width bucket per field key for one view state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnLayout {
    widths: HashMap<String, ColumnWidth>,
}

impl ColumnLayout {
    pub fn measure(fields: &[FieldDefinition], items: &[Item]) -> Self {
        let widths = fields
            .iter()
            .map(|f| {
                (
                    f.key.clone(),
                    ColumnWidth::for_length(max_display_length(f, items)),
                )
            })
            .collect();
        Self { widths }
    }

    /// Unknown keys get the minimum width
    pub fn width_for(&self, key: &str) -> ColumnWidth {
        self.widths.get(key).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_collection::{CollectionId, FieldType};
    use crate::domain::a002_item::{ItemId, Metadata};
    use serde_json::json;

    fn item_with(key: &str, value: serde_json::Value) -> Item {
        let mut metadata = Metadata::new();
        metadata.insert(key.into(), value);
        Item {
            id: ItemId::new("x"),
            collection_id: CollectionId(1),
            metadata,
            is_public: true,
            created_at: "2024-01-01T00:00:00Z".into(),
            updated_at: None,
        }
    }

    #[test]
    fn test_bucket_thresholds() {
        assert_eq!(ColumnWidth::for_length(0), ColumnWidth::Minimum);
        assert_eq!(ColumnWidth::for_length(10), ColumnWidth::Minimum);
        assert_eq!(ColumnWidth::for_length(11), ColumnWidth::Moderate);
        assert_eq!(ColumnWidth::for_length(50), ColumnWidth::Moderate);
        assert_eq!(ColumnWidth::for_length(51), ColumnWidth::Wide);
        assert_eq!(ColumnWidth::for_length(100), ColumnWidth::Wide);
        assert_eq!(ColumnWidth::for_length(101), ColumnWidth::VeryWide);
    }

    #[test]
    fn test_value_of_ten_and_eleven_chars() {
        let field = FieldDefinition::new("isbn", "ISBN", FieldType::Text);
        let ten = vec![item_with("isbn", json!("0123456789"))];
        let eleven = vec![item_with("isbn", json!("0123456789X"))];
        assert_eq!(
            ColumnLayout::measure(std::slice::from_ref(&field), &ten).width_for("isbn"),
            ColumnWidth::Minimum
        );
        assert_eq!(
            ColumnLayout::measure(std::slice::from_ref(&field), &eleven).width_for("isbn"),
            ColumnWidth::Moderate
        );
    }

    #[test]
    fn test_label_counts_toward_length() {
        let field = FieldDefinition::new("n", "A rather long column label", FieldType::Text);
        assert_eq!(max_display_length(&field, &[]), 26);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let field = FieldDefinition::new("t", "T", FieldType::Text);
        let items = vec![item_with("t", json!("가나다라마바사아자차"))];
        assert_eq!(max_display_length(&field, &items), 10);
    }

    #[test]
    fn test_style() {
        assert_eq!(ColumnWidth::Minimum.style(), "min-width: 150px;");
        assert_eq!(
            ColumnWidth::VeryWide.style(),
            "min-width: 750px; max-width: 9000px;"
        );
    }

    #[test]
    fn test_unknown_key_is_minimum() {
        assert_eq!(
            ColumnLayout::default().width_for("anything"),
            ColumnWidth::Minimum
        );
    }
}
