pub mod auth;
pub mod badges;
pub mod exercises;
pub mod metrics;
pub mod phishing;
pub mod progression;
pub mod settings;
pub mod tracking;
pub mod users;

use axum::{middleware as axum_middleware, Router};

use crate::middleware::require_auth;
use crate::state::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/api/health", axum::routing::get(health_check))
        .nest("/auth", auth::auth_routes(state.clone()))
        .nest("/t", tracking::tracking_routes(state.clone()));

    // Protected routes (auth required)
    let protected_routes = Router::new()
        .nest("/api", api_routes(state.clone()))
        .layer(axum_middleware::from_fn_with_state(state, require_auth));

    public_routes.merge(protected_routes)
}

/// API routes under /api/* (protected by auth middleware)
fn api_routes(state: AppState) -> Router {
    Router::new()
        .nest("/user", users::users_routes(state.clone()))
        .nest("/exercises", exercises::exercises_routes(state.clone()))
        .nest("/badges", badges::badges_routes(state.clone()))
        .nest("/progression", progression::progression_routes(state.clone()))
        .nest("/metrics", metrics::metrics_routes(state.clone()))
        .nest("/phishing", phishing::phishing_routes(state.clone()))
        .nest("/settings", settings::settings_routes(state.clone()))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
