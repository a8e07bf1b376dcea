//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `MAILER_API_KEY` - Bearer key for the email-delivery API
//! - `CONTACT_SENDER` - Sender identity, e.g. `Contact Form <noreply@example.com>`
//! - `CONTACT_RECIPIENT` - Mailbox that receives every contact message
//!
//! ## Optional Variables
//!
//! - `MAILER_API_URL` - Delivery API send endpoint (default: Resend's)
//! - `MAILER_TIMEOUT_SECONDS` - Delivery request timeout (default: 10)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

use crate::domain::validation::EMAIL_PATTERN;

/// Default send endpoint of the email-delivery API.
const DEFAULT_MAILER_API_URL: &str = "https://api.resend.com/emails";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Send endpoint of the email-delivery API.
    pub mailer_api_url: String,
    /// Bearer key authenticating against the delivery API.
    pub mailer_api_key: String,
    /// Timeout for a single delivery request, in seconds.
    pub mailer_timeout_seconds: u64,
    /// Sender identity placed on every outbound email.
    pub sender: String,
    /// Recipient mailbox for every contact message. Fixed per deployment,
    /// never derived from submitted data.
    pub recipient: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let mailer_api_url =
            env::var("MAILER_API_URL").unwrap_or_else(|_| DEFAULT_MAILER_API_URL.to_string());
        let mailer_api_key = env::var("MAILER_API_KEY").context("MAILER_API_KEY must be set")?;

        let mailer_timeout_seconds = env::var("MAILER_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let sender = env::var("CONTACT_SENDER").context("CONTACT_SENDER must be set")?;
        let recipient = env::var("CONTACT_RECIPIENT").context("CONTACT_RECIPIENT must be set")?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            mailer_api_url,
            mailer_api_key,
            mailer_timeout_seconds,
            sender,
            recipient,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `log_format` is not `text` or `json`
    /// - the delivery API URL or key is malformed
    /// - the sender or recipient address does not parse
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.mailer_api_url.starts_with("http://")
            && !self.mailer_api_url.starts_with("https://")
        {
            anyhow::bail!(
                "MAILER_API_URL must start with 'http://' or 'https://', got '{}'",
                self.mailer_api_url
            );
        }

        if self.mailer_api_key.is_empty() {
            anyhow::bail!("MAILER_API_KEY must not be empty");
        }

        if self.mailer_timeout_seconds == 0 || self.mailer_timeout_seconds > 300 {
            anyhow::bail!(
                "MAILER_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.mailer_timeout_seconds
            );
        }

        if !EMAIL_PATTERN.is_match(address_part(&self.sender)) {
            anyhow::bail!("CONTACT_SENDER is not a valid address: '{}'", self.sender);
        }

        if !EMAIL_PATTERN.is_match(address_part(&self.recipient)) {
            anyhow::bail!(
                "CONTACT_RECIPIENT is not a valid address: '{}'",
                self.recipient
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Delivery API: {}", self.mailer_api_url);
        tracing::info!("  Delivery API key: {}", mask_secret(&self.mailer_api_key));
        tracing::info!("  Sender: {}", self.sender);
        tracing::info!("  Recipient: {}", self.recipient);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Extracts the bare address from a `Display Name <address>` identity.
///
/// Returns the input unchanged when it carries no angle brackets.
fn address_part(identity: &str) -> &str {
    match (identity.find('<'), identity.rfind('>')) {
        (Some(start), Some(end)) if start < end => &identity[start + 1..end],
        _ => identity,
    }
}

/// Masks a secret for logging, keeping a short recognizable prefix.
fn mask_secret(secret: &str) -> String {
    if secret.len() <= 4 {
        return "***".to_string();
    }

    format!("{}***", &secret[..4])
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
