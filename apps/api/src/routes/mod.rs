pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::planning::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Tracks API
        .route("/api/v1/tracks", post(handlers::handle_generate_tracks))
        .route("/api/v1/tracks/upload", post(handlers::handle_upload_tracks))
        .route("/api/v1/tracks/page", post(handlers::handle_tracks_page))
        .with_state(state)
}
