//! Contact submission entity produced by the contact form.

use serde::{Deserialize, Serialize};

/// A single contact form submission.
///
/// The entity is transient: it is constructed from user input, validated,
/// serialized into the dispatch request, rendered into an email document, and
/// discarded. It carries no identifier and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Creates a new submission from the four form fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Returns true if every field is non-empty after trimming.
    ///
    /// This is the cheap presence pre-check used by the form controller before
    /// running full validation. It is stricter than the dispatch endpoint's
    /// own presence check, which accepts whitespace-only values.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}
