//! Handler for the contact dispatch endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::contact::{ContactRequest, ContactResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Receives a contact submission and relays it as an email.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "subject": "Analytical engines",
///   "message": "Notes on the engine."
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "message": "Email sent successfully." }
/// ```
///
/// # Errors
///
/// - **400**: a required field is missing or empty:
///   `{"success": false, "error": "Missing required fields."}`
/// - **500**: the body could not be parsed, or rendering/dispatch failed:
///   `{"success": false, "error": "..."}`
///
/// Every failure is caught here and mapped onto the structured result; none
/// propagates as a transport-level failure.
pub async fn contact_handler(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    // An unreadable body is an internal failure of the request, not a
    // validation verdict: the contract reserves 400 for missing fields.
    let Json(payload) = payload.map_err(|e| AppError::internal(e.body_text()))?;

    if !payload.has_all_fields() {
        return Err(AppError::bad_request("Missing required fields."));
    }

    let submission = payload.into_submission();
    state.contact_service.dispatch(&submission).await?;

    Ok(Json(ContactResponse {
        success: true,
        message: "Email sent successfully.".to_string(),
    }))
}
