//! DTOs for the contact dispatch endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ContactSubmission;

/// Incoming contact form payload.
///
/// Missing JSON keys deserialize to empty strings, so absence and emptiness
/// are rejected by the same presence check. The check is deliberately coarser
/// than the client's: no format or length rules, and whitespace-only values
/// pass.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    /// True when every field carries at least one character.
    pub fn has_all_fields(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.subject.is_empty()
            && !self.message.is_empty()
    }

    /// Converts the payload into the domain entity.
    pub fn into_submission(self) -> ContactSubmission {
        ContactSubmission {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
        }
    }
}

/// Successful dispatch response: `{"success": true, "message": "..."}`.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}
