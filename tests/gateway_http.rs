use std::sync::Arc;
use std::time::Duration;

use contact_relay::domain::entities::ContactSubmission;
use contact_relay::domain::gateways::{SubmissionGateway, SubmitError};
use contact_relay::domain::validation::Field;
use contact_relay::form::FormController;
use contact_relay::infrastructure::http::HttpSubmissionGateway;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn submission() -> ContactSubmission {
    ContactSubmission::new("A", "a@b.com", "S", "M")
}

fn gateway_for(server: &MockServer) -> HttpSubmissionGateway {
    HttpSubmissionGateway::new(
        format!("{}/api/contact", server.uri()),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_gateway_interprets_success_response() {
    let endpoint = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Email sent successfully."
        })))
        .expect(1)
        .mount(&endpoint)
        .await;

    let receipt = gateway_for(&endpoint).send(&submission()).await.unwrap();

    assert_eq!(receipt.message.as_deref(), Some("Email sent successfully."));
}

#[tokio::test]
async fn test_gateway_surfaces_server_reported_error() {
    let endpoint = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "error": "Missing required fields."
        })))
        .mount(&endpoint)
        .await;

    let result = gateway_for(&endpoint).send(&submission()).await;

    match result {
        Err(SubmitError::Rejected(message)) => {
            assert_eq!(message, "Missing required fields.");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_gateway_reports_network_failure() {
    // Nothing listens on this port.
    let gateway =
        HttpSubmissionGateway::new("http://127.0.0.1:9/api/contact", Duration::from_secs(1))
            .unwrap();

    let result = gateway.send(&submission()).await;

    assert!(matches!(result, Err(SubmitError::Network(_))));
}

#[tokio::test]
async fn test_controller_end_to_end_over_http() {
    let endpoint = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Email sent successfully."
        })))
        .expect(1)
        .mount(&endpoint)
        .await;

    let mut controller = FormController::new(Arc::new(gateway_for(&endpoint)));
    controller.update_field(Field::Name, "A");
    controller.update_field(Field::Email, "a@b.com");
    controller.update_field(Field::Subject, "S");
    controller.update_field(Field::Message, "M");

    controller.submit().await;

    assert!(controller.show_success());
    assert_eq!(controller.submit_error(), None);
    assert_eq!(controller.value(Field::Message), "");

    let requests = endpoint.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["name"], "A");
    assert_eq!(body["email"], "a@b.com");
}

#[tokio::test]
async fn test_controller_keeps_fields_when_endpoint_rejects() {
    let endpoint = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "error": "quota exceeded"
        })))
        .mount(&endpoint)
        .await;

    let mut controller = FormController::new(Arc::new(gateway_for(&endpoint)));
    controller.update_field(Field::Name, "A");
    controller.update_field(Field::Email, "a@b.com");
    controller.update_field(Field::Subject, "S");
    controller.update_field(Field::Message, "M");

    controller.submit().await;

    assert!(!controller.show_success());
    assert_eq!(controller.submit_error().as_deref(), Some("quota exceeded"));
    assert_eq!(controller.value(Field::Name), "A");
    assert_eq!(controller.value(Field::Message), "M");
}
