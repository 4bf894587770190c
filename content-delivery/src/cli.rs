//! This module implements the CLI interface for content-delivery: command parsing,
//! config loading and printing of fetched content.
//!
//! All mapping and transport logic lives in the [`content-delivery-core`] crate.
//! This module is strictly CLI glue.
//!
//! ## How To Use
//! - For command-line users: use the installed `content-delivery` binary with `--help`.
//! - For programmatic/integration use: call [`run`] with a constructed [`Cli`].
//!
//! [`content-delivery-core`]: ../../content-delivery-core/

use crate::load_config::load_config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use content_delivery_core::ContentClient;
use std::path::PathBuf;

/// CLI for content-delivery: fetch published content items.
#[derive(Parser)]
#[clap(
    name = "content-delivery",
    version,
    about = "Fetch content items from the content delivery API with legacy shapes upgraded and links inlined"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a content item by delivery id and print it as JSON
    Get {
        /// Path to the YAML config file
        #[clap(long)]
        config: PathBuf,
        /// Delivery id of the content item
        #[clap(long)]
        id: String,
        /// Locale overriding the configured one
        #[clap(long)]
        locale: Option<String>,
    },
    /// Print the query URL for a delivery id without sending a request
    Url {
        /// Path to the YAML config file
        #[clap(long)]
        config: PathBuf,
        /// Delivery id of the content item
        #[clap(long)]
        id: String,
        /// Locale overriding the configured one
        #[clap(long)]
        locale: Option<String>,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Get { config, id, locale } => {
            let mut config = load_config(config)?;
            if locale.is_some() {
                config.locale = locale;
            }
            tracing::info!(command = "get", id = %id, "Fetching content item");
            let client = ContentClient::new(config)?;
            match client.get_content_item(&id).await {
                Ok(item) => {
                    println!("{}", serde_json::to_string_pretty(&item.to_json())?);
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(command = "get", id = %id, error = %e, "Fetching content item failed");
                    Err(anyhow::Error::new(e).context(format!("Failed to fetch content item {id}")))
                }
            }
        }
        Commands::Url { config, id, locale } => {
            let mut config = load_config(config)?;
            if locale.is_some() {
                config.locale = locale;
            }
            let client = ContentClient::new(config)?;
            let url = client.content_item_url(&id);
            tracing::info!(command = "url", id = %id, url = %url, "Built query URL");
            println!("{}{}", client.config().base_url.trim_end_matches('/'), url);
            Ok(())
        }
    }
}
