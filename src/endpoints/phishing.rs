use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use sea_orm::{EntityTrait, QueryOrder};

use crate::error::{AppError, Result};
use crate::models::phishing_campaign;
use crate::models::prelude::*;
use crate::schemas::campaign::CampaignResponse;
use crate::state::AppState;

pub fn phishing_routes(state: AppState) -> Router {
    Router::new()
        .route("/campaigns", get(list_campaigns))
        .route("/campaigns/{campaign_id}", get(get_campaign))
        .with_state(state)
}

/// Campaigns newest first, with rates derived from the stored counters.
async fn list_campaigns(State(state): State<AppState>) -> Result<Json<Vec<CampaignResponse>>> {
    let campaigns = PhishingCampaign::find()
        .order_by_desc(phishing_campaign::Column::SentAt)
        .all(&state.db)
        .await?;
    Ok(Json(
        campaigns.into_iter().map(CampaignResponse::from).collect(),
    ))
}

async fn get_campaign(
    State(state): State<AppState>,
    Path(campaign_id): Path<i64>,
) -> Result<Json<CampaignResponse>> {
    let campaign = PhishingCampaign::find_by_id(campaign_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Campaign {} not found", campaign_id)))?;
    Ok(Json(CampaignResponse::from(campaign)))
}
