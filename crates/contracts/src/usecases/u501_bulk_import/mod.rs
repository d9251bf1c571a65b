pub mod decoder;
pub mod events;
pub mod progress;
pub mod request;

pub use decoder::EventStreamDecoder;
pub use events::{ImportEvent, ImportedItem, RemainingUrl};
pub use progress::{ImportPhase, ImportProgressState};
pub use request::BulkImportForm;

use crate::usecases::common::UseCaseMetadata;

pub struct BulkImport;

impl UseCaseMetadata for BulkImport {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "bulk_import"
    }

    fn display_name() -> &'static str {
        "CSV bulk import"
    }

    fn description() -> &'static str {
        "Scrape every URL listed in a CSV file and create one item per row"
    }
}
