use axum::{Router, routing::get};

use crate::{AppState, handlers::commands};

pub const MOVIE: &str = "/movie";
pub const SHOW: &str = "/show";

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(MOVIE, get(commands::movie_handler))
        .route(SHOW, get(commands::show_handler))
}
