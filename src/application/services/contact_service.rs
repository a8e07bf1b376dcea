//! Contact message dispatch service.

use std::sync::Arc;

use askama::Template;

use crate::domain::entities::ContactSubmission;
use crate::domain::gateways::{Mailer, OutboundEmail};
use crate::error::AppError;

/// Subject-line prefix applied to every dispatched message.
const SUBJECT_PREFIX: &str = "New Contact Message: ";

/// HTML email document embedding the four submission fields.
///
/// Rendered through askama so every interpolated value is HTML-escaped;
/// user-supplied text cannot inject markup into the email.
#[derive(Template)]
#[template(path = "contact_email.html")]
struct ContactEmail<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Service that turns a submission into exactly one outbound email.
///
/// Sender and recipient are fixed at construction from configuration; neither
/// is derived from the submitted data. The submission itself is never stored.
pub struct ContactService<M: Mailer> {
    mailer: Arc<M>,
    sender: String,
    recipient: String,
}

impl<M: Mailer> ContactService<M> {
    /// Creates a new contact service.
    pub fn new(mailer: Arc<M>, sender: String, recipient: String) -> Self {
        Self {
            mailer,
            sender,
            recipient,
        }
    }

    /// Renders the email document and dispatches it via the mailer.
    ///
    /// The mailer call is awaited; there is no queuing, no retry, and no
    /// fire-and-forget. Exactly one email leaves per successful call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if rendering or dispatch fails. The
    /// failure is logged here; the caller only maps it onto the response.
    pub async fn dispatch(&self, submission: &ContactSubmission) -> Result<(), AppError> {
        let html = ContactEmail {
            name: &submission.name,
            email: &submission.email,
            subject: &submission.subject,
            message: &submission.message,
        }
        .render()?;

        let email = OutboundEmail {
            from: self.sender.clone(),
            to: self.recipient.clone(),
            subject: format!("{SUBJECT_PREFIX}{}", submission.subject),
            html,
        };

        self.mailer.send(email).await.map_err(|e| {
            tracing::error!(error = %e, "failed to dispatch contact message");
            AppError::from(e)
        })?;

        tracing::info!(subject = %submission.subject, "contact message dispatched");
        Ok(())
    }
}
