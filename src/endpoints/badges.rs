use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::error::Result;
use crate::schemas::badge::BadgeResponse;
use crate::services::progression;
use crate::state::AppState;

pub fn badges_routes(state: AppState) -> Router {
    Router::new()
        .route("/user/{user_id}", get(earned_badges))
        .route("/all/{user_id}", get(all_badges))
        .with_state(state)
}

/// Badges the user has earned, newest first.
async fn earned_badges(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<BadgeResponse>>> {
    Ok(Json(progression::user_badges(&state.db, user_id).await?))
}

/// Every active badge flagged with the user's earned state.
async fn all_badges(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<BadgeResponse>>> {
    Ok(Json(
        progression::all_badges_for_user(&state.db, user_id).await?,
    ))
}
