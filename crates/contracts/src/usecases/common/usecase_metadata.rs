/// Метаданные UseCase для идентификации в логах и UI
pub trait UseCaseMetadata {
    /// Index of the use case (e.g. "u601")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "optimize_code")
    fn usecase_name() -> &'static str;

    /// Human readable name shown in the page title
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name like "u601_optimize_code"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
