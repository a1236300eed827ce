use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OptimizerConfig {
    pub endpoint: EndpointConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Absolute URL, or a path resolved against the page origin
    pub url: String,
    /// Abort the request after this many milliseconds; absent means wait indefinitely
    #[serde(default)]
    pub request_timeout_ms: Option<u32>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid optimizer config: {0}")]
    Parse(#[from] toml::de::Error),
}

macro_rules! default_endpoint_url {
    () => {
        "http://localhost:8000/optimize-code"
    };
}

/// Endpoint used when no override is configured
pub const DEFAULT_ENDPOINT_URL: &str = default_endpoint_url!();

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = concat!("[endpoint]\nurl = \"", default_endpoint_url!(), "\"\n");

/// Build-time override: the TOML document in `OPTIMIZER_CONFIG` when the bundle was compiled
const OVERRIDE_CONFIG: Option<&str> = option_env!("OPTIMIZER_CONFIG");

impl EndpointConfig {
    /// Zero is treated as "no timeout"
    pub fn timeout_ms(&self) -> Option<u32> {
        self.request_timeout_ms.filter(|ms| *ms > 0)
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig {
                url: DEFAULT_ENDPOINT_URL.to_string(),
                request_timeout_ms: None,
            },
        }
    }
}

pub fn parse_config(contents: &str) -> Result<OptimizerConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Load the optimizer configuration
///
/// Search order:
/// 1. `OPTIMIZER_CONFIG` captured at build time
/// 2. Falls back to embedded default config
pub fn load_config() -> Result<OptimizerConfig, ConfigError> {
    if let Some(contents) = OVERRIDE_CONFIG {
        match parse_config(contents) {
            Ok(config) => {
                log::info!("Using OPTIMIZER_CONFIG from build environment");
                return Ok(config);
            }
            Err(e) => log::warn!("{e}; falling back to embedded default"),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, OptimizerConfig::default());
        assert_eq!(config.endpoint.timeout_ms(), None);
    }

    #[test]
    fn test_default_endpoint_shared() {
        assert_eq!(DEFAULT_ENDPOINT_URL, "http://localhost:8000/optimize-code");
        assert_eq!(OptimizerConfig::default().endpoint.url, DEFAULT_ENDPOINT_URL);
        assert_eq!(
            parse_config(DEFAULT_CONFIG).unwrap().endpoint.url,
            DEFAULT_ENDPOINT_URL
        );
    }

    #[test]
    fn test_timeout_parsed() {
        let config = parse_config(
            r#"
            [endpoint]
            url = "/optimize-code"
            request_timeout_ms = 30000
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoint.url, "/optimize-code");
        assert_eq!(config.endpoint.timeout_ms(), Some(30000));
    }

    #[test]
    fn test_zero_timeout_disabled() {
        let config = parse_config(
            r#"
            [endpoint]
            url = "http://localhost:8000/optimize-code"
            request_timeout_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoint.timeout_ms(), None);
    }

    #[test]
    fn test_missing_url_rejected() {
        let err = parse_config("[endpoint]\nrequest_timeout_ms = 10").unwrap_err();
        assert!(err.to_string().starts_with("invalid optimizer config"));
    }
}
