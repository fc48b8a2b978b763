use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/change-image-format", post(handlers::change_image_format))
        .route("/rotate-image", post(handlers::rotate_image))
        .route("/resize-image", post(handlers::resize_image))
        .route("/add-watermark", post(handlers::add_watermark))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
