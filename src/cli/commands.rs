//! CLI command definitions and handlers

use clap::Subcommand;
use std::time::Duration;
use tracing::info;

use translate_api::TranslationClient;
use translate_api::ClientConfig;
use translate_api::{TargetLanguage, TranslationResponse};

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "TRANSLATE_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "TRANSLATE_API_BASE_URL";

/// Commands for the Translate API CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a text into one or more languages
    Translate {
        /// Text to translate (source language is auto-detected)
        text: String,

        /// Target language; repeat for several (e.g. -t fr -t de)
        #[arg(short, long = "target", required = true)]
        targets: Vec<String>,
    },

    /// Run the bundled examples against the API
    Demo,
}

/// Build the client configuration from CLI values, falling back to the
/// environment for anything not given on the command line
pub fn resolve_config(
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_ms: Option<u64>,
) -> anyhow::Result<ClientConfig> {
    let api_key = api_key.or_else(|| std::env::var(API_KEY_ENV).ok());
    let base_url = base_url.or_else(|| std::env::var(BASE_URL_ENV).ok());
    build_config(api_key, base_url, timeout_ms)
}

fn build_config(
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_ms: Option<u64>,
) -> anyhow::Result<ClientConfig> {
    let api_key = api_key.filter(|k| !k.trim().is_empty()).ok_or_else(|| {
        anyhow::anyhow!(
            "API key is required: pass --api-key or set {}. Get one at https://translate-api.com",
            API_KEY_ENV
        )
    })?;

    let mut config = ClientConfig::new(api_key);
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(timeout_ms) = timeout_ms {
        config = config.with_timeout(Duration::from_millis(timeout_ms));
    }

    config.validate()?;
    Ok(config)
}

/// One `-t` is sent as a single language, several as a list
pub fn target_from_args(mut targets: Vec<String>) -> TargetLanguage {
    if targets.len() == 1 {
        TargetLanguage::Single(targets.remove(0))
    } else {
        TargetLanguage::Multiple(targets)
    }
}

/// Render a response, listing requested languages first in request order
pub fn format_result(response: &TranslationResponse, target: &TargetLanguage) -> String {
    let mut lines = Vec::new();

    for code in target.codes() {
        match response.get(code) {
            Some(text) => lines.push(format!("{}: {}", code, text)),
            None => lines.push(format!("{}: <missing>", code)),
        }
    }

    let mut extra: Vec<_> = response
        .translations
        .iter()
        .filter(|(code, _)| !target.codes().contains(&code.as_str()))
        .collect();
    extra.sort();
    for (code, text) in extra {
        lines.push(format!("{}: {}", code, text));
    }

    if let Some(source) = &response.source_language {
        lines.push(format!("Detected source language: {}", source));
    }
    lines.push(format!("Characters used: {}", response.characters_used));

    lines.join("\n")
}

/// Handle the translate command
pub async fn handle_translate(
    config: ClientConfig,
    text: String,
    targets: Vec<String>,
) -> anyhow::Result<()> {
    let client = TranslationClient::with_config(config)?;
    let target = target_from_args(targets);

    info!("Translating {} characters into {}", text.chars().count(), target);

    let response = client.translate(&text, target.clone()).await?;
    println!("{}", format_result(&response, &target));

    Ok(())
}

/// Handle the demo command
pub async fn handle_demo(config: ClientConfig) -> anyhow::Result<()> {
    let client = TranslationClient::with_config(config)?;

    println!("🌍 Translate API - Rust SDK Example\n");

    println!("Example 1: Translate to Spanish");
    let text = "Hello, how are you?";
    let target = TargetLanguage::from("es");
    match client.translate(text, target.clone()).await {
        Ok(response) => {
            println!("Input: {}", text);
            println!("{}\n", format_result(&response, &target));
        }
        Err(e) => {
            print_error_hints(&e);
            return Err(e.into());
        }
    }

    println!("Example 2: Translate to multiple languages");
    let text = "Good morning!";
    let target = TargetLanguage::from(["fr", "de", "it", "ja"]);
    match client.translate(text, target.clone()).await {
        Ok(response) => {
            println!("Input: {}", text);
            println!("{}\n", format_result(&response, &target));
        }
        Err(e) => {
            print_error_hints(&e);
            return Err(e.into());
        }
    }

    println!("✅ All examples completed successfully!");
    println!("\n📖 Documentation: https://translate-api.com/documentation");

    Ok(())
}

fn print_error_hints(err: &translate_api::TranslationError) {
    eprintln!("❌ Error: {}\n", err);
    eprintln!("💡 Make sure you:");
    eprintln!("   1. Have a valid API key from https://translate-api.com");
    eprintln!("   2. Passed it with --api-key or {}", API_KEY_ENV);
    eprintln!("   3. Have enough character quota in your account");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_parse_translate_command() {
        let cli = TestCli::try_parse_from(["t", "translate", "Hello", "-t", "fr", "--target", "de"])
            .unwrap();

        match cli.command {
            Commands::Translate { text, targets } => {
                assert_eq!(text, "Hello");
                assert_eq!(targets, vec!["fr", "de"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_translate_requires_target() {
        assert!(TestCli::try_parse_from(["t", "translate", "Hello"]).is_err());
    }

    #[test]
    fn test_target_from_args() {
        assert_eq!(
            target_from_args(vec!["es".to_string()]),
            TargetLanguage::Single("es".to_string())
        );
        assert_eq!(
            target_from_args(vec!["fr".to_string(), "de".to_string()]),
            TargetLanguage::Multiple(vec!["fr".to_string(), "de".to_string()])
        );
    }

    #[test]
    fn test_build_config() {
        let config = build_config(
            Some("key".to_string()),
            Some("http://localhost:1234".to_string()),
            Some(2500),
        )
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:1234");
        assert_eq!(config.timeout, Some(Duration::from_millis(2500)));

        let config = build_config(Some("key".to_string()), None, None).unwrap();
        assert_eq!(config.base_url, translate_api::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_build_config_requires_key() {
        assert!(build_config(None, None, None).is_err());
        assert!(build_config(Some(String::new()), None, None).is_err());
    }

    #[test]
    fn test_format_result() {
        let response = TranslationResponse {
            success: true,
            translations: HashMap::from([
                ("fr".to_string(), "Bonjour".to_string()),
                ("de".to_string(), "Guten Morgen".to_string()),
            ]),
            source_language: Some("en".to_string()),
            characters_used: 13,
        };
        let target = TargetLanguage::from(["fr", "de"]);

        let output = format_result(&response, &target);
        assert_eq!(
            output,
            "fr: Bonjour\nde: Guten Morgen\nDetected source language: en\nCharacters used: 13"
        );
    }

    #[test]
    fn test_format_result_marks_missing() {
        let response = TranslationResponse {
            success: true,
            translations: HashMap::from([("es".to_string(), "Hola".to_string())]),
            source_language: None,
            characters_used: 5,
        };

        let output = format_result(&response, &TargetLanguage::from(["es", "it"]));
        assert!(output.contains("es: Hola"));
        assert!(output.contains("it: <missing>"));
        assert!(!output.contains("Detected source language"));
    }
}
