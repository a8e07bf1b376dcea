//! HTTP implementation of the submission gateway.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::entities::ContactSubmission;
use crate::domain::gateways::{SubmissionGateway, SubmitError, SubmitReceipt};

/// Structured result body of the dispatch endpoint.
#[derive(Debug, Deserialize)]
struct DispatchResult {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    error: Option<String>,
}

/// [`SubmissionGateway`] implementation that POSTs the submission as JSON to
/// the dispatch endpoint and interprets its `{success, message?, error?}`
/// result.
#[derive(Debug, Clone)]
pub struct HttpSubmissionGateway {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSubmissionGateway {
    /// Creates a gateway for the given dispatch endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl SubmissionGateway for HttpSubmissionGateway {
    async fn send(&self, submission: &ContactSubmission) -> Result<SubmitReceipt, SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        let result = response
            .json::<DispatchResult>()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if status.is_success() && result.success {
            return Ok(SubmitReceipt {
                message: result.message,
            });
        }

        Err(SubmitError::Rejected(result.error.unwrap_or_else(|| {
            format!("server responded with status {status}")
        })))
    }
}
