//! Client-side contact form controller.
//!
//! An embeddable state machine for driving a contact form UI: it owns the
//! field values, runs validation, performs the submission through an injected
//! [`SubmissionGateway`](crate::domain::gateways::SubmissionGateway), and
//! manages the transient UI state (in-flight flag, success banner, error
//! banner). Rendering is left entirely to the embedding frontend.

pub mod controller;

pub use controller::FormController;
