pub mod error;
pub mod outcome;
pub mod request;
pub mod response;

pub use error::TransportError;
pub use outcome::OptimizeOutcome;
pub use request::{CodeSource, FormField, FormValue, OptimizeRequest, SelectedFile};
pub use response::OptimizeResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct OptimizeCode;

impl UseCaseMetadata for OptimizeCode {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "optimize_code"
    }

    fn display_name() -> &'static str {
        "TSX Optimizer"
    }

    fn description() -> &'static str {
        "Отправка .tsx файла или вставленного кода на сервис оптимизации"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(OptimizeCode::full_name(), "u601_optimize_code");
        assert_eq!(OptimizeCode::display_name(), "TSX Optimizer");
    }
}
