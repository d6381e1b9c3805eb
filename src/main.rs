//! Main entry point for the Translate API CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::commands::{self, Commands};

/// Translate API - command line client
#[derive(Parser, Debug)]
#[command(name = "translate-api", version, about, long_about = None)]
struct Args {
    /// API key (optional, defaults to TRANSLATE_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// API base URL (optional, defaults to TRANSLATE_API_BASE_URL or the production endpoint)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("translate_api={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(command) = args.command else {
        println!("Please specify a command. Use --help for more information.");
        return Ok(());
    };

    let config = commands::resolve_config(args.api_key, args.base_url, args.timeout_ms)?;

    // Execute command
    match command {
        Commands::Translate { text, targets } => {
            commands::handle_translate(config, text, targets).await?;
        }
        Commands::Demo => {
            commands::handle_demo(config).await?;
        }
    }

    Ok(())
}
