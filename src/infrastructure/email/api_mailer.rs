//! HTTP client for the transactional email-delivery API.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::gateways::{Mailer, MailerError, OutboundEmail};

/// JSON body of the delivery API's send endpoint.
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Error body the delivery API returns on a refused send.
#[derive(Debug, Deserialize)]
struct SendEmailFailure {
    message: Option<String>,
}

/// [`Mailer`] implementation backed by an HTTP delivery API.
///
/// Sends one `POST` per email, authenticated with a bearer API key. The
/// endpoint is configurable so tests can point it at a local stub server.
#[derive(Debug, Clone)]
pub struct ApiMailer {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ApiMailer {
    /// Creates a mailer for the given send endpoint.
    ///
    /// `timeout` bounds the whole request; the pipeline imposes no timeout
    /// of its own beyond this client-level one.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    /// The configured send endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Mailer for ApiMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailerError> {
        let body = SendEmailRequest {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Prefer the API's own error message; fall back to the status line.
        let detail = response
            .json::<SendEmailFailure>()
            .await
            .ok()
            .and_then(|f| f.message)
            .unwrap_or_else(|| format!("delivery API responded with status {status}"));

        Err(MailerError::Rejected(detail))
    }
}
