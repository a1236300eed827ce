use thiserror::Error;

/// Any failure to obtain a usable response from the endpoint.
///
/// All variants are shown to the user as the same generic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("request aborted")]
    Aborted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TransportError::Status(502).to_string(), "HTTP 502");
        assert_eq!(
            TransportError::Request("TypeError: Failed to fetch".into()).to_string(),
            "request failed: TypeError: Failed to fetch"
        );
        assert_eq!(TransportError::Aborted.to_string(), "request aborted");
    }
}
