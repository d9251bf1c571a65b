/// Identification of a UseCase for logs and UI titles
pub trait UseCaseMetadata {
    /// Index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "bulk_import"
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u501_bulk_import"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    impl UseCaseMetadata for Sample {
        fn usecase_index() -> &'static str {
            "u599"
        }
        fn usecase_name() -> &'static str {
            "sample"
        }
        fn display_name() -> &'static str {
            "Sample"
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(Sample::full_name(), "u599_sample");
        assert_eq!(Sample::description(), "");
    }
}
