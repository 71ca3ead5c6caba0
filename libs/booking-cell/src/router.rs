// libs/booking-cell/src/router.rs
use axum::{handler::Handler, routing::post, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::handlers;

pub fn booking_routes() -> Router {
    booking_routes_with(handlers::book_appointment)
}

/// Mounts `handler` on `/bookAppointment` behind the panic-to-500 layer.
pub fn booking_routes_with<H, T>(handler: H) -> Router
where
    H: Handler<T, ()>,
    T: 'static,
{
    Router::new()
        .route("/bookAppointment", post(handler))
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
}
