//! Gateway trait for the external email-delivery service.

use async_trait::async_trait;
use thiserror::Error;

/// A fully rendered email document ready for delivery.
///
/// Matches the delivery service's send contract: a sender identity, a single
/// recipient, a subject line, and an HTML body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Failure modes of an email dispatch attempt.
#[derive(Debug, Error)]
pub enum MailerError {
    /// The delivery service answered, but refused the message.
    #[error("email delivery service rejected the message: {0}")]
    Rejected(String),

    /// The delivery service could not be reached or did not answer in time.
    #[error("email delivery request failed: {0}")]
    Transport(String),
}

/// Interface to the email-delivery service.
///
/// The service is treated as a black box that either delivers the message or
/// fails; there is no queuing and no retry at this layer. Timeouts are
/// delegated to the underlying HTTP client.
///
/// # Implementations
///
/// - [`crate::infrastructure::email::ApiMailer`] - HTTP delivery API adapter
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends a single rendered email.
    ///
    /// # Errors
    ///
    /// Returns [`MailerError::Rejected`] when the service refuses the message
    /// and [`MailerError::Transport`] when the request itself fails.
    async fn send(&self, email: OutboundEmail) -> Result<(), MailerError>;
}
