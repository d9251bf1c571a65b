pub mod mapping;
pub mod request;

pub use mapping::{
    apply_mapping, auto_match, from_backend, initial_mapping, merge_scraped, set_target, to_backend,
    BackendMapping, FieldMapping, ManualValues, MappingStats,
};
pub use request::{MappingResponse, SaveMappingRequest, ScrapeUrlRequest, ScrapeUrlResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct ScrapeUrl;

impl UseCaseMetadata for ScrapeUrl {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "scrape_url"
    }

    fn display_name() -> &'static str {
        "Fill from URL"
    }

    fn description() -> &'static str {
        "Scrape one product page and map its values onto the collection's fields"
    }
}
