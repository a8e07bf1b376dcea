//! Pure client-side validation of contact submissions.
//!
//! Mirrors the rules enforced by the contact form: required fields, a simple
//! `local@domain.tld` email shape, and a message length cap. Rules are
//! evaluated in a fixed order and each field retains at most one error: the
//! last rule evaluated wins.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::ContactSubmission;

/// Maximum message length in characters.
pub const MESSAGE_MAX_CHARS: usize = 2000;

/// Compiled pattern for the accepted email shape: one or more non-space,
/// non-`@` characters, an `@`, more of the same, a dot, then one or more
/// non-space characters.
pub static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// The four fields of a contact submission, used as error-mapping keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The field's wire/form name.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of validating a submission: a mapping of field to error message.
///
/// A submission is valid iff the mapping is empty; acceptance is
/// all-or-nothing, never partial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, String>,
}

impl ValidationReport {
    /// True when no field has an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error message recorded for a field, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Iterates over `(field, message)` pairs in form order.
    pub fn errors(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Removes the error recorded for a single field, leaving the rest.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    fn set(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

/// Validates a submission against the client-side rules.
///
/// Pure function, no side effects. Rules per field:
///
/// - `name`: required (non-empty after trimming)
/// - `email`: required; otherwise must match [`EMAIL_PATTERN`]
/// - `subject`: required
/// - `message`: required; independently, at most [`MESSAGE_MAX_CHARS`]
///   characters. The length rule also fires on a whitespace-only message
///   and, being evaluated last, overwrites the required-message error.
pub fn validate(submission: &ContactSubmission) -> ValidationReport {
    let mut report = ValidationReport::default();

    if submission.name.trim().is_empty() {
        report.set(Field::Name, "Name is required.");
    }

    if submission.email.trim().is_empty() {
        report.set(Field::Email, "Email is required.");
    } else if !EMAIL_PATTERN.is_match(&submission.email) {
        report.set(Field::Email, "Please enter a valid email address.");
    }

    if submission.subject.trim().is_empty() {
        report.set(Field::Subject, "Subject is required.");
    }

    if submission.message.trim().is_empty() {
        report.set(Field::Message, "Message is required.");
    }

    if !submission.message.is_empty() && submission.message.chars().count() > MESSAGE_MAX_CHARS {
        report.set(Field::Message, "Message cannot exceed 2000 characters.");
    }

    report
}
