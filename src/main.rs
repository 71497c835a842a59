//! Safechat - safety-screened terminal chat client
//!
//! Main entry point for the Safechat application.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use safechat::cli::{Cli, Commands};
use safechat::commands;
use safechat::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load and validate configuration
    let config = Config::load(&cli.config)?;
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat { model } => {
            tracing::info!("Starting interactive chat mode");
            commands::chat::run_chat(config, model).await?;
            Ok(())
        }
        Commands::Ask { prompt, model } => {
            tracing::info!("Starting one-shot prompt mode");
            commands::ask::run_ask(config, prompt, model).await?;
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "safechat=debug" } else { "safechat=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
