//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete HTTP-backed adapters for the pipeline's two collaborators.
//!
//! # Modules
//!
//! - [`email`] - Email-delivery API client implementing the `Mailer` gateway
//! - [`http`] - Dispatch-endpoint client implementing the `SubmissionGateway`

pub mod email;
pub mod http;
