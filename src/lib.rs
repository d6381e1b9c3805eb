//! Translate API - Rust client
//!
//! Asynchronous client for the hosted Translate API
//! (<https://translate-api.com>). One call translates a text into one or
//! more target languages; the source language is detected by the server.
//!
//! ```no_run
//! # async fn run() -> translate_api::Result<()> {
//! let client = translate_api::TranslationClient::new("your-api-key")?;
//!
//! let result = client.translate("Hello", "es").await?;
//! println!("{}", result.translations["es"]);
//!
//! let result = client.translate("Good morning!", ["fr", "de"]).await?;
//! println!("{:?}", result.translations);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::TranslationClient,
    config::{ClientConfig, DEFAULT_BASE_URL},
    errors::{Result, TranslationError},
    models::{TargetLanguage, TranslationRequest, TranslationResponse},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
