//! Email-delivery service adapter.

pub mod api_mailer;

pub use api_mailer::ApiMailer;
