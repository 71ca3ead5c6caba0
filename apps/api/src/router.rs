use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use booking_cell::router::booking_routes;

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(|| async { "Booking webhook is running!" }))
        .merge(booking_routes())
        .layer(cors_layer())
}

/// Every origin may call the webhook.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
