//! Gateway trait for submitting a contact form to the dispatch endpoint.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::ContactSubmission;

/// Acknowledgement returned by a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Human-readable confirmation from the server, when it provides one.
    pub message: Option<String>,
}

/// Failure modes of a submission attempt, as seen by the form controller.
///
/// The controller surfaces the `Display` text of either variant as its
/// banner error, so both carry the most specific message available.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The server answered and reported a failure.
    #[error("{0}")]
    Rejected(String),

    /// The request never completed (connection failure, timeout, bad payload).
    #[error("network error: {0}")]
    Network(String),
}

/// Interface between the form controller and the dispatch endpoint.
///
/// One method, one request: the controller guarantees at most one in-flight
/// submission at a time, so implementations do not need to deduplicate.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpSubmissionGateway`] - HTTP POST adapter
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Sends one submission and interprets the server's structured result.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Rejected`] for a server-reported failure and
    /// [`SubmitError::Network`] when no structured result was obtained.
    async fn send(&self, submission: &ContactSubmission) -> Result<SubmitReceipt, SubmitError>;
}
