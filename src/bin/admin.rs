//! CLI administration tool for contact-relay.
//!
//! Provides commands for verifying a deployment without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Validate the configuration and print a summary
//! cargo run --bin admin -- config check
//!
//! # Send a test message through the configured delivery service
//! cargo run --bin admin -- send-test
//!
//! # Send the test message to a different mailbox
//! cargo run --bin admin -- send-test --recipient me@example.com
//! ```
//!
//! # Environment Variables
//!
//! Same as the service itself; see `contact_relay::config`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use contact_relay::application::services::ContactService;
use contact_relay::config;
use contact_relay::domain::entities::ContactSubmission;
use contact_relay::infrastructure::email::ApiMailer;

/// CLI tool for managing contact-relay.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Send a test message through the configured delivery service
    SendTest {
        /// Recipient override (defaults to CONTACT_RECIPIENT)
        #[arg(short, long)]
        recipient: Option<String>,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Load, validate, and summarize the configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Check => config_check(),
        },
        Commands::SendTest { recipient } => send_test(recipient).await,
    }
}

/// Loads and validates the configuration, printing the summary on success.
fn config_check() -> Result<()> {
    let config = config::load_from_env()?;
    config.print_summary();
    println!("Configuration OK");
    Ok(())
}

/// Dispatches a test message exactly the way the endpoint would.
async fn send_test(recipient: Option<String>) -> Result<()> {
    let config = config::load_from_env()?;
    let recipient = recipient.unwrap_or_else(|| config.recipient.clone());

    let mailer = ApiMailer::new(
        config.mailer_api_url.clone(),
        config.mailer_api_key.clone(),
        Duration::from_secs(config.mailer_timeout_seconds),
    )?;

    let service = ContactService::new(Arc::new(mailer), config.sender.clone(), recipient.clone());

    let submission = ContactSubmission::new(
        "Contact Relay",
        address_only(&config.sender),
        "Test message",
        "This is a test message sent by `admin send-test`.",
    );

    match service.dispatch(&submission).await {
        Ok(()) => {
            println!("Test message sent to {recipient}");
            Ok(())
        }
        Err(e) => anyhow::bail!("Test dispatch failed: {e:?}"),
    }
}

/// Strips a `Display Name <address>` identity down to the address.
fn address_only(identity: &str) -> &str {
    match (identity.find('<'), identity.rfind('>')) {
        (Some(start), Some(end)) if start < end => &identity[start + 1..end],
        _ => identity,
    }
}
