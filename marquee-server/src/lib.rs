//! # Marquee Server
//!
//! Front end for the Marquee bot. Serves `movie` and `show` replies over
//! HTTP and backs the one-shot lookups of the `marquee-server` binary.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Full application router: health probe, versioned API and request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .merge(routes::create_api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
