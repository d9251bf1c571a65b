pub mod apply;
pub mod request;

pub use apply::{apply_suggestions, clean_suggestions, ApplyMode};
pub use request::{SuggestFieldsRequest, SuggestFieldsResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct SuggestFields;

impl UseCaseMetadata for SuggestFields {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "suggest_fields"
    }

    fn display_name() -> &'static str {
        "Suggest fields"
    }

    fn description() -> &'static str {
        "Ask the AI service for a field schema matching the collection's name and description"
    }
}
