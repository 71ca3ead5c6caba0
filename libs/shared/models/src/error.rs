use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const MISSING_BODY_MESSAGE: &str = "Missing JSON data in request.";
pub const MISSING_FIELD_MESSAGE: &str = "Missing required parameters.";
pub const MISSING_FIELD_DETAIL: &str = "Symptoms and doctorType are required.";
pub const INTERNAL_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Missing JSON data in request.")]
    MissingBody,

    #[error("Symptoms and doctorType are required.")]
    MissingField,

    #[error("{0}")]
    Internal(String),
}

/// Wire shape shared by every failed booking response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FailureBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl BookingError {
    /// Converts a caught panic payload into an internal fault carrying the panic text.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let detail = if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic message".to_string()
        };
        BookingError::Internal(detail)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            BookingError::MissingBody | BookingError::MissingField => StatusCode::BAD_REQUEST,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn failure_body(&self) -> FailureBody {
        let (message, error_message) = match self {
            BookingError::MissingBody => (MISSING_BODY_MESSAGE, None),
            BookingError::MissingField => (MISSING_FIELD_MESSAGE, Some(MISSING_FIELD_DETAIL.to_string())),
            BookingError::Internal(detail) => (INTERNAL_MESSAGE, Some(detail.clone())),
        };

        FailureBody {
            success: false,
            message: message.to_string(),
            error_message,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("An unexpected error occurred: {}", self);
        } else {
            tracing::warn!("Rejected booking request: {}: {}", status, self);
        }

        (status, Json(self.failure_body())).into_response()
    }
}
