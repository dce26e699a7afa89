use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::Value;

use crate::api::errors::ApiError;
use crate::domain::mailing_list::record::MailingListRecord;
use crate::state::AppState;

/// Response from a successful signup
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub data: Vec<Value>,
}

/// Accept a mailing-list signup submission
///
/// POST /api/signup
///
/// The body is read raw and parsed here rather than through the `Json`
/// extractor: a malformed body must take the generic server-error path,
/// not the framework's rejection.
pub async fn signup(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    // Parse the request body
    let body: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("Failed to parse signup body: {}", e);
        ApiError::internal_server_error("Server error. Invalid request.")
    })?;

    // Validate and normalize the submission
    let record = MailingListRecord::from_body(&body)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    // Save to the mailing list store
    let rows = state
        .mailing_list
        .insert(&record)
        .await
        .map_err(|e| ApiError::internal_server_error(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "Success!".to_string(),
            data: rows,
        }),
    ))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
