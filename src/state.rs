use std::sync::Arc;

use crate::application::services::ContactService;
use crate::infrastructure::email::ApiMailer;

/// Shared application state injected into all handlers.
///
/// The service is stateless between requests; this struct only carries the
/// wired-up dependencies.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService<ApiMailer>>,
    /// Delivery API endpoint, reported by the health check.
    pub mailer_endpoint: String,
}
