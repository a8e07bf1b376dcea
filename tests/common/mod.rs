#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use contact_relay::api;
use contact_relay::application::services::ContactService;
use contact_relay::infrastructure::email::ApiMailer;
use contact_relay::state::AppState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_SENDER: &str = "Contact Form <noreply@portfolio.test>";
pub const TEST_RECIPIENT: &str = "owner@portfolio.test";

/// Builds application state with the mailer pointed at a stub delivery API.
pub fn create_test_state(delivery_api_url: &str) -> AppState {
    let endpoint = format!("{delivery_api_url}/emails");
    let mailer = ApiMailer::new(endpoint.clone(), "test-api-key", Duration::from_secs(5))
        .expect("failed to build test mailer");

    let contact_service = Arc::new(ContactService::new(
        Arc::new(mailer),
        TEST_SENDER.to_string(),
        TEST_RECIPIENT.to_string(),
    ));

    AppState {
        contact_service,
        mailer_endpoint: endpoint,
    }
}

/// The application router as served in production, minus outer layers.
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api::routes::routes())
        .with_state(state)
}

/// Mounts a delivery-API stub that accepts `count` sends.
pub async fn mount_delivery_ok(server: &MockServer, count: u64) {
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "test-email-id"
        })))
        .expect(count)
        .mount(server)
        .await;
}
