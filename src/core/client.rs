//! Async client for the Translate API

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::config::ClientConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{ApiErrorBody, TargetLanguage, TranslationRequest, TranslationResponse};

/// Translate API client.
///
/// Holds only immutable configuration, so one instance (or its clones, which
/// share the connection pool) can serve any number of concurrent calls.
#[derive(Clone)]
pub struct TranslationClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
    endpoint: Url,
    auth_header: HeaderValue,
}

impl TranslationClient {
    /// Create a client for the production endpoint.
    ///
    /// Fails with [`TranslationError::Configuration`] when `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client from an explicit configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TranslationError::config(format!("Failed to create HTTP client: {}", e)))?;

        Self::from_parts(config, client)
    }

    /// Create a client that sends requests through a caller-supplied
    /// `reqwest::Client` (proxy, TLS, pool settings).
    ///
    /// `config.timeout` is not applied here; configure timeouts on the
    /// supplied client instead.
    pub fn with_http_client(config: ClientConfig, client: reqwest::Client) -> Result<Self> {
        config.validate()?;

        if config.timeout.is_some() {
            debug!("Using caller-supplied HTTP client; configured timeout is ignored");
        }

        Self::from_parts(config, client)
    }

    fn from_parts(config: ClientConfig, client: reqwest::Client) -> Result<Self> {
        let endpoint = config.endpoint()?;

        let mut auth_header = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| TranslationError::config(format!("Invalid API key: {}", e)))?;
        auth_header.set_sensitive(true);

        Ok(Self {
            client,
            config: Arc::new(config),
            endpoint,
            auth_header,
        })
    }

    /// Translate `text` into one or more languages.
    ///
    /// `target_language` keeps its shape on the wire: `"es"` is sent as a
    /// string, `["fr", "de"]` as an array. The source language is detected
    /// by the server.
    pub async fn translate(
        &self,
        text: &str,
        target_language: impl Into<TargetLanguage>,
    ) -> Result<TranslationResponse> {
        let request = TranslationRequest::new(text, target_language);
        self.send(&request).await
    }

    /// Send a prepared translation request
    pub async fn send(&self, request: &TranslationRequest) -> Result<TranslationResponse> {
        let body = serde_json::to_vec(request).map_err(|e| TranslationError::RequestBuild {
            message: format!("failed to serialize request: {}", e),
        })?;

        let http_request = self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, self.auth_header.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .build()
            .map_err(|e| TranslationError::RequestBuild {
                message: format!("failed to create request: {}", e),
            })?;

        debug!(
            "Sending translation request to {} ({} target language(s))",
            self.endpoint,
            request.target_language.len()
        );

        let response = self.client.execute(http_request).await?;
        let status = response.status();

        if status != StatusCode::OK {
            let bytes = response.bytes().await.unwrap_or_default();
            let message = serde_json::from_slice::<ApiErrorBody>(&bytes)
                .unwrap_or_default()
                .error
                .filter(|m| !m.is_empty());

            warn!(
                "Translation request failed with HTTP {}: {}",
                status.as_u16(),
                message.as_deref().unwrap_or("no error message")
            );

            return Err(TranslationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let result: TranslationResponse =
            serde_json::from_slice(&bytes).map_err(|e| TranslationError::Decode {
                message: e.to_string(),
            })?;

        if result.success && result.translations.is_empty() {
            return Err(TranslationError::Decode {
                message: "response reported success without translations".to_string(),
            });
        }

        debug!(
            "Translated into {} language(s), {} characters used",
            result.translations.len(),
            result.characters_used
        );

        Ok(result)
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Full URL of the translate endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl fmt::Debug for TranslationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationClient")
            .field("config", &self.config)
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_creation() {
        let client = TranslationClient::new("test_key").unwrap();
        assert_eq!(client.base_url(), "https://translate-api.com/v1");
        assert_eq!(
            client.endpoint().as_str(),
            "https://translate-api.com/v1/translate"
        );
    }

    #[test]
    fn test_client_rejects_empty_key() {
        let err = TranslationClient::new("").unwrap_err();
        assert!(matches!(err, TranslationError::Configuration { .. }));
        assert!(err.to_string().contains("API key is required"));
    }

    #[test]
    fn test_client_with_config() {
        let config = ClientConfig::new("test_key")
            .with_base_url("http://127.0.0.1:9000/v2/")
            .with_timeout(Duration::from_secs(3));
        let client = TranslationClient::with_config(config).unwrap();

        assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:9000/v2/translate");
        assert_eq!(client.config().timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_client_debug_hides_key() {
        let client = TranslationClient::new("super-secret").unwrap();
        assert!(!format!("{:?}", client).contains("super-secret"));
    }

    #[test]
    fn test_client_with_http_client_validates_config() {
        let err = TranslationClient::with_http_client(ClientConfig::new(""), reqwest::Client::new())
            .unwrap_err();
        assert!(matches!(err, TranslationError::Configuration { .. }));

        let client =
            TranslationClient::with_http_client(ClientConfig::new("test_key"), reqwest::Client::new())
                .unwrap();
        assert_eq!(client.base_url(), "https://translate-api.com/v1");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<TranslationClient>();
    }
}
