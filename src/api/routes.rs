//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{contact_handler, health_handler};
use crate::state::AppState;

/// All API routes.
///
/// # Endpoints
///
/// - `POST /contact` - Relay a contact form submission as an email
/// - `GET  /health`  - Service health and delivery-API configuration
///
/// The contact endpoint is public by design: it backs the portfolio site's
/// contact form, which has no authenticated user.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact_handler))
        .route("/health", get(health_handler))
}
