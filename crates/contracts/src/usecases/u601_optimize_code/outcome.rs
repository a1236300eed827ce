use super::error::TransportError;
use super::response::OptimizeResponse;

/// Result of one submission after the round trip, reduced to what the form shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimizeOutcome {
    /// Endpoint returned optimized code
    Optimized(String),
    /// Endpoint reported an error in the body
    ServerError(String),
    /// Body carried neither key
    Empty,
    /// No usable response
    TransportFailed(TransportError),
}

impl OptimizeOutcome {
    /// Empty strings count as missing, so `{"optimized": "", "error": "E"}` is a server error.
    pub fn from_result(result: Result<OptimizeResponse, TransportError>) -> Self {
        match result {
            Ok(resp) => Self::from(resp),
            Err(e) => Self::TransportFailed(e),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Optimized(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Optimized(_) => "optimized",
            Self::ServerError(_) => "server_error",
            Self::Empty => "empty",
            Self::TransportFailed(_) => "transport_failed",
        }
    }
}

impl From<OptimizeResponse> for OptimizeOutcome {
    fn from(resp: OptimizeResponse) -> Self {
        let OptimizeResponse { optimized, error } = resp;
        if let Some(text) = optimized.filter(|t| !t.is_empty()) {
            return Self::Optimized(text);
        }
        match error.filter(|t| !t.is_empty()) {
            Some(text) => Self::ServerError(text),
            None => Self::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimized_wins_over_error() {
        let resp = OptimizeResponse {
            optimized: Some("X".into()),
            error: Some("Y".into()),
        };
        assert_eq!(OptimizeOutcome::from(resp), OptimizeOutcome::Optimized("X".into()));
    }

    #[test]
    fn test_empty_optimized_falls_through_to_error() {
        let resp = OptimizeResponse {
            optimized: Some(String::new()),
            error: Some("Y".into()),
        };
        assert_eq!(OptimizeOutcome::from(resp), OptimizeOutcome::ServerError("Y".into()));
    }

    #[test]
    fn test_neither_key_is_empty() {
        assert_eq!(
            OptimizeOutcome::from(OptimizeResponse::default()),
            OptimizeOutcome::Empty
        );
        let blank = OptimizeResponse::error("");
        assert_eq!(OptimizeOutcome::from(blank), OptimizeOutcome::Empty);
    }

    #[test]
    fn test_transport_error() {
        let outcome = OptimizeOutcome::from_result(Err(TransportError::Status(500)));
        assert_eq!(outcome, OptimizeOutcome::TransportFailed(TransportError::Status(500)));
        assert!(!outcome.is_success());
        assert_eq!(outcome.kind(), "transport_failed");
    }

    #[test]
    fn test_success_kind() {
        let outcome = OptimizeOutcome::from_result(Ok(OptimizeResponse::optimized("done")));
        assert!(outcome.is_success());
        assert_eq!(outcome.kind(), "optimized");
    }
}
