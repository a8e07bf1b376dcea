//! Gateway trait definitions for the domain layer.
//!
//! This module defines the interfaces (traits) that abstract the pipeline's
//! two external collaborators, following the same ports-and-adapters pattern
//! as the rest of the crate. The traits are implemented by concrete adapters
//! in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for outbound calls
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Gateways
//!
//! - [`Mailer`] - Email-delivery service invoked by the dispatch endpoint
//! - [`SubmissionGateway`] - Dispatch endpoint as seen from the form controller

pub mod mailer;
pub mod submission_gateway;

pub use mailer::{Mailer, MailerError, OutboundEmail};
pub use submission_gateway::{SubmissionGateway, SubmitError, SubmitReceipt};

#[cfg(test)]
pub use mailer::MockMailer;
#[cfg(test)]
pub use submission_gateway::MockSubmissionGateway;
