mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jackett_core::{load_config, validate_config, JackettClient, SanitizedConfig};

use commands::{execute, Cli, Command};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Loading configuration from {:?}", cli.config);
    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;

    if let Command::Config = cli.command {
        let sanitized = SanitizedConfig::from(&config);
        println!("{}", serde_json::to_string_pretty(&sanitized)?);
        return Ok(());
    }

    validate_config(&config).context("Configuration validation failed")?;

    let client =
        JackettClient::new(config.client_settings()).context("Failed to create Jackett client")?;
    debug!(base_url = %client.connection().base_url, "Jackett client ready");

    let output = execute(&client, &cli.command, &config.download.directory).await?;
    println!("{}", output);
    Ok(())
}
