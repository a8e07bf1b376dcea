//! # Contact Relay
//!
//! The contact pipeline of a personal portfolio website: client-side form
//! validation, a dispatch endpoint, and outbound delivery through a
//! transactional email API. Built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The submission entity, validation rules,
//!   and gateway traits
//! - **Application Layer** ([`application`]) - Email rendering and dispatch
//!   orchestration
//! - **Form Layer** ([`form`]) - Embeddable client-side form controller
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP adapters for the
//!   delivery API and the dispatch endpoint
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Pipeline
//!
//! User input → client validation → `POST /api/contact` → server presence
//! check → HTML email rendering → delivery API call → structured response →
//! client UI state update. The submission is never persisted anywhere.
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export MAILER_API_KEY="re_..."
//! export CONTACT_SENDER="Contact Form <noreply@example.com>"
//! export CONTACT_RECIPIENT="you@example.com"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod form;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ContactService;
    pub use crate::domain::entities::ContactSubmission;
    pub use crate::domain::gateways::{Mailer, SubmissionGateway};
    pub use crate::domain::validation::{Field, validate};
    pub use crate::error::AppError;
    pub use crate::form::FormController;
    pub use crate::state::AppState;
}
