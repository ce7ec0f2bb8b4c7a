use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::error::Result;
use crate::schemas::progress::{DashboardResponse, ModuleProgressResponse};
use crate::services::progression;
use crate::state::AppState;

pub fn progression_routes(state: AppState) -> Router {
    Router::new()
        .route("/dashboard/{user_id}", get(dashboard))
        .route("/modules/{user_id}", get(modules))
        .with_state(state)
}

async fn dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<DashboardResponse>> {
    Ok(Json(progression::dashboard(&state.db, user_id).await?))
}

async fn modules(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<ModuleProgressResponse>>> {
    Ok(Json(progression::module_progress(&state.db, user_id).await?))
}
