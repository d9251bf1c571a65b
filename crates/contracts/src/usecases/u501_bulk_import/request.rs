use crate::domain::a001_collection::CollectionId;

/// Multipart form of `POST /api/scraper/bulk-scrape-csv-stream`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkImportForm {
    pub collection_id: CollectionId,
    pub apply_mapping: bool,
}

impl BulkImportForm {
    pub const FILE_FIELD: &'static str = "file";
    pub const COLLECTION_ID_FIELD: &'static str = "collection_id";
    pub const APPLY_MAPPING_FIELD: &'static str = "apply_mapping";

    pub fn new(collection_id: CollectionId, apply_mapping: bool) -> Self {
        Self {
            collection_id,
            apply_mapping,
        }
    }

    /// Text parts as (name, value), the file part excluded
    pub fn text_parts(&self) -> [(&'static str, String); 2] {
        [
            (Self::COLLECTION_ID_FIELD, self.collection_id.to_string()),
            (Self::APPLY_MAPPING_FIELD, self.apply_mapping.to_string()),
        ]
    }

    /// The backend only accepts `.csv` file names
    pub fn accepts_file_name(name: &str) -> bool {
        name.to_ascii_lowercase().ends_with(".csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_parts() {
        let form = BulkImportForm::new(CollectionId(7), true);
        assert_eq!(
            form.text_parts(),
            [
                ("collection_id", "7".to_string()),
                ("apply_mapping", "true".to_string())
            ]
        );
    }

    #[test]
    fn test_accepts_csv_only() {
        assert!(BulkImportForm::accepts_file_name("books.CSV"));
        assert!(!BulkImportForm::accepts_file_name("books.xlsx"));
    }
}
