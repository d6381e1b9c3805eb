//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Target language(s) for a translation request.
///
/// The API accepts either one language code or a list of codes, and the
/// shape is kept on the wire: `Single` serializes as a JSON string,
/// `Multiple` as a JSON array in the order given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetLanguage {
    /// One language code, e.g. `"es"`
    Single(String),
    /// An ordered list of language codes
    Multiple(Vec<String>),
}

impl TargetLanguage {
    /// Language codes in request order
    pub fn codes(&self) -> Vec<&str> {
        match self {
            TargetLanguage::Single(code) => vec![code.as_str()],
            TargetLanguage::Multiple(codes) => codes.iter().map(String::as_str).collect(),
        }
    }

    /// Number of requested languages
    pub fn len(&self) -> usize {
        match self {
            TargetLanguage::Single(_) => 1,
            TargetLanguage::Multiple(codes) => codes.len(),
        }
    }

    /// True for an empty `Multiple`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetLanguage::Single(code) => write!(f, "{}", code),
            TargetLanguage::Multiple(codes) => write!(f, "{}", codes.join(",")),
        }
    }
}

impl From<&str> for TargetLanguage {
    fn from(code: &str) -> Self {
        TargetLanguage::Single(code.to_string())
    }
}

impl From<String> for TargetLanguage {
    fn from(code: String) -> Self {
        TargetLanguage::Single(code)
    }
}

impl From<&String> for TargetLanguage {
    fn from(code: &String) -> Self {
        TargetLanguage::Single(code.clone())
    }
}

impl From<Vec<String>> for TargetLanguage {
    fn from(codes: Vec<String>) -> Self {
        TargetLanguage::Multiple(codes)
    }
}

impl From<Vec<&str>> for TargetLanguage {
    fn from(codes: Vec<&str>) -> Self {
        TargetLanguage::Multiple(codes.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for TargetLanguage {
    fn from(codes: &[&str]) -> Self {
        TargetLanguage::Multiple(codes.iter().map(|c| c.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TargetLanguage {
    fn from(codes: [&str; N]) -> Self {
        TargetLanguage::Multiple(codes.iter().map(|c| c.to_string()).collect())
    }
}

/// Translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate; the source language is detected by the server
    pub text: String,
    /// Language(s) to translate into
    pub target_language: TargetLanguage,
}

impl TranslationRequest {
    /// Build a request for `text` into `target_language`
    pub fn new(text: impl Into<String>, target_language: impl Into<TargetLanguage>) -> Self {
        Self {
            text: text.into(),
            target_language: target_language.into(),
        }
    }
}

/// Translation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    /// Whether the server reports the translation as successful
    pub success: bool,
    /// Translated text keyed by language code
    #[serde(default)]
    pub translations: HashMap<String, String>,
    /// Detected source language, when the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    /// Billed characters
    #[serde(default)]
    pub characters_used: u64,
}

impl TranslationResponse {
    /// Translation for a language code
    pub fn get(&self, language: &str) -> Option<&str> {
        self.translations.get(language).map(String::as_str)
    }
}

/// Error body returned alongside a non-200 status
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
