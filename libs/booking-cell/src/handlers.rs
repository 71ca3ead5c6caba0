// libs/booking-cell/src/handlers.rs
use std::any::Any;

use axum::{
    body::Bytes,
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use shared_models::error::BookingError;

use crate::models::{BookingRequest, BookingSuccess};
use crate::services::booking::BookingService;

/// Webhook for the `bookAppointment` tool.
///
/// The body is read raw so that missing or malformed JSON is reported with
/// the booking failure shape instead of axum's default rejection.
#[axum::debug_handler]
pub async fn book_appointment(
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<BookingSuccess>, BookingError> {
    debug!("Received request with headers: {:?}", headers);
    debug!("Received request body: {}", String::from_utf8_lossy(&body));

    let request = BookingRequest::from_json_body(&body)?;

    let booking_service = BookingService::new();
    let booking = booking_service.book_appointment(request)?;

    Ok(Json(booking))
}

/// Renders a panic raised while serving a request as the 500 booking failure.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    BookingError::from_panic(err).into_response()
}
