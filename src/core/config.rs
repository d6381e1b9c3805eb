//! Configuration management

use reqwest::header::HeaderValue;
use reqwest::Url;
use std::fmt;
use std::time::Duration;

use crate::core::errors::{Result, TranslationError};

/// Production endpoint of the Translate API
pub const DEFAULT_BASE_URL: &str = "https://translate-api.com/v1";

/// Configuration for [`TranslationClient`](crate::TranslationClient)
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Bearer token sent with every request
    pub api_key: String,
    /// API root; requests go to `{base_url}/translate`
    pub base_url: String,
    /// Whole-request timeout; `None` leaves the transport default
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Configuration for the production endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Override the API root (staging, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a whole-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(TranslationError::config(
                "API key is required. Get one at https://translate-api.com",
            ));
        }

        if HeaderValue::from_str(&self.api_key).is_err() {
            return Err(TranslationError::config(
                "API key contains characters not allowed in an HTTP header",
            ));
        }

        if self.base_url.trim().is_empty() {
            return Err(TranslationError::config("Base URL is required"));
        }

        self.endpoint().map(|_| ())
    }

    /// `{base_url}/translate`, tolerating a trailing slash on the base URL
    pub(crate) fn endpoint(&self) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        let url = Url::parse(&format!("{}/translate", base)).map_err(|e| {
            TranslationError::config(format!("Invalid base URL {:?}: {}", self.base_url, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(TranslationError::config(format!(
                "Unsupported base URL scheme: {}",
                scheme
            ))),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = ClientConfig::new("test_key");
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_config_validation_missing_key() {
        assert!(matches!(
            ClientConfig::new("").validate(),
            Err(TranslationError::Configuration { .. })
        ));
        assert!(ClientConfig::new("   ").validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_header_key() {
        assert!(ClientConfig::new("key\nwith-newline").validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_base_url() {
        assert!(ClientConfig::new("k").with_base_url("").validate().is_err());
        assert!(ClientConfig::new("k").with_base_url("not a url").validate().is_err());
        assert!(ClientConfig::new("k")
            .with_base_url("ftp://translate-api.com")
            .validate()
            .is_err());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = ClientConfig::new("k").with_base_url("http://localhost:8080/v1/");
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://localhost:8080/v1/translate"
        );

        let config = ClientConfig::new("k");
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://translate-api.com/v1/translate"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new("super-secret").with_timeout(Duration::from_secs(5));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
