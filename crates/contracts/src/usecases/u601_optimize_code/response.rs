use serde::{Deserialize, Serialize};

/// Ответ сервиса оптимизации
///
/// Both keys are optional; a body with neither is legal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OptimizeResponse {
    pub fn optimized(text: impl Into<String>) -> Self {
        Self {
            optimized: Some(text.into()),
            error: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            optimized: None,
            error: Some(text.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optimized() {
        let resp: OptimizeResponse = serde_json::from_str(r#"{"optimized":"X"}"#).unwrap();
        assert_eq!(resp, OptimizeResponse::optimized("X"));
    }

    #[test]
    fn test_parse_error() {
        let resp: OptimizeResponse =
            serde_json::from_str(r#"{"error":"Only .tsx files are allowed."}"#).unwrap();
        assert_eq!(resp, OptimizeResponse::error("Only .tsx files are allowed."));
    }

    #[test]
    fn test_parse_empty_object() {
        let resp: OptimizeResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp, OptimizeResponse::default());
    }

    #[test]
    fn test_unknown_keys_and_nulls_ignored() {
        let resp: OptimizeResponse =
            serde_json::from_str(r#"{"optimized":null,"model":"gpt","error":"Y"}"#).unwrap();
        assert_eq!(resp, OptimizeResponse::error("Y"));
    }

    #[test]
    fn test_non_object_body_rejected() {
        assert!(serde_json::from_str::<OptimizeResponse>("<html>").is_err());
        assert!(serde_json::from_str::<OptimizeResponse>(r#""text""#).is_err());
    }
}
