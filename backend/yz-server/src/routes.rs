use crate::{AppState, get_profile, health, register, update_profile};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        // Identity endpoints
        .route("/auth/register", post(register))
        .route("/auth/profile", get(get_profile).put(update_profile))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // Photo URLs may be inline data URIs
        .layer(DefaultBodyLimit::max(max_body_bytes))
        // CORS middleware (browser frontend is served from another origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
