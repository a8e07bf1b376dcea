mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_contact_success_dispatches_exactly_one_email() {
    let delivery_api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("Authorization", "Bearer test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "test-email-id" })))
        .expect(1)
        .mount(&delivery_api)
        .await;

    let state = common::create_test_state(&delivery_api.uri());
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "A",
            "email": "a@b.com",
            "subject": "S",
            "message": "M"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Email sent successfully.");

    let requests = delivery_api.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let email: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(email["from"], common::TEST_SENDER);
    assert_eq!(email["to"], common::TEST_RECIPIENT);
    assert_eq!(email["subject"], "New Contact Message: S");
    let html = email["html"].as_str().unwrap();
    assert!(html.contains("A"));
    assert!(html.contains("a@b.com"));
    assert!(html.contains("M"));
}

#[tokio::test]
async fn test_contact_missing_field_is_rejected_without_dispatch() {
    let delivery_api = MockServer::start().await;
    common::mount_delivery_ok(&delivery_api, 0).await;

    let state = common::create_test_state(&delivery_api.uri());
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "A",
            "subject": "S",
            "message": "M"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing required fields.");

    assert!(delivery_api.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_contact_empty_field_is_rejected() {
    let delivery_api = MockServer::start().await;
    common::mount_delivery_ok(&delivery_api, 0).await;

    let state = common::create_test_state(&delivery_api.uri());
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "A",
            "email": "",
            "subject": "S",
            "message": "M"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Missing required fields."
    );
}

#[tokio::test]
async fn test_contact_whitespace_fields_pass_the_coarse_presence_check() {
    // The endpoint's check is coarser than the client's: any non-empty value
    // passes, whitespace included.
    let delivery_api = MockServer::start().await;
    common::mount_delivery_ok(&delivery_api, 1).await;

    let state = common::create_test_state(&delivery_api.uri());
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": " ",
            "email": " ",
            "subject": " ",
            "message": " "
        }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_contact_delivery_failure_maps_to_500_with_detail() {
    let delivery_api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "quota exceeded" })),
        )
        .expect(1)
        .mount(&delivery_api)
        .await;

    let state = common::create_test_state(&delivery_api.uri());
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "A",
            "email": "a@b.com",
            "subject": "S",
            "message": "M"
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
    assert!(
        body["error"].as_str().unwrap().contains("quota exceeded"),
        "unexpected error: {}",
        body["error"]
    );
}

#[tokio::test]
async fn test_contact_malformed_body_maps_to_500() {
    let delivery_api = MockServer::start().await;
    common::mount_delivery_ok(&delivery_api, 0).await;

    let state = common::create_test_state(&delivery_api.uri());
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/contact")
        .content_type("application/json")
        .text("{not valid json")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<serde_json::Value>()["success"], false);
}

#[tokio::test]
async fn test_contact_html_is_escaped_in_the_outbound_email() {
    let delivery_api = MockServer::start().await;
    common::mount_delivery_ok(&delivery_api, 1).await;

    let state = common::create_test_state(&delivery_api.uri());
    let server = TestServer::new(common::test_app(state)).unwrap();

    server
        .post("/api/contact")
        .json(&json!({
            "name": "A",
            "email": "a@b.com",
            "subject": "S",
            "message": "<script>alert(1)</script>"
        }))
        .await
        .assert_status_ok();

    let requests = delivery_api.received_requests().await.unwrap();
    let email: serde_json::Value = requests[0].body_json().unwrap();
    let html = email["html"].as_str().unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("alert(1)"));
}
