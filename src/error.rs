use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::models::response::ErrorResponse;

/// Every way a submission can be turned away.
///
/// The `Display` text doubles as the `error` field of the JSON body sent back
/// to the caller, so it must stay stable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    /// No webhook URL was supplied through the environment.
    #[error("Webhook not configured")]
    NotConfigured,

    /// The request body could not be parsed as JSON.
    #[error("Invalid JSON")]
    InvalidJson,

    /// A field the active profile requires is absent or blank.
    #[error("Missing required fields")]
    MissingFields,

    /// Payment method or plan is outside the profile's allow-list.
    #[error("Invalid payment fields")]
    InvalidPayment,

    /// The webhook call failed or returned a non-success status.
    #[error("Failed to send to Discord")]
    Delivery,
}

impl SubmissionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            SubmissionError::InvalidJson
            | SubmissionError::MissingFields
            | SubmissionError::InvalidPayment => StatusCode::BAD_REQUEST,
            SubmissionError::Delivery => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
