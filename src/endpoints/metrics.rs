use axum::{extract::State, routing::get, Json, Router};

use crate::error::Result;
use crate::schemas::metrics::CompanyMetricsResponse;
use crate::services::metrics;
use crate::state::AppState;

pub fn metrics_routes(state: AppState) -> Router {
    Router::new()
        .route("/company", get(company_metrics))
        .with_state(state)
}

/// Latest snapshot; computed on the fly when none has been taken yet.
async fn company_metrics(State(state): State<AppState>) -> Result<Json<CompanyMetricsResponse>> {
    let snapshot = match metrics::latest(&state.db).await? {
        Some(snapshot) => snapshot,
        None => metrics::recalculate(&state.db).await?,
    };
    Ok(Json(CompanyMetricsResponse::from(snapshot)))
}
