use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::error::{AppError, Result};
use crate::models::config_entry;
use crate::models::prelude::*;
use crate::schemas::settings::{ConfigEntryResponse, UpdateConfigEntry};
use crate::services::config_store;
use crate::state::AppState;

pub fn settings_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_settings))
        .route("/{key}", get(get_setting).put(put_setting))
        .with_state(state)
}

async fn list_settings(State(state): State<AppState>) -> Result<Json<Vec<ConfigEntryResponse>>> {
    let entries = ConfigEntry::find()
        .order_by_asc(config_entry::Column::Key)
        .all(&state.db)
        .await?;
    Ok(Json(
        entries.into_iter().map(ConfigEntryResponse::from).collect(),
    ))
}

async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ConfigEntryResponse>> {
    let entry = ConfigEntry::find()
        .filter(config_entry::Column::Key.eq(key.as_str()))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Setting {} not found", key)))?;
    Ok(Json(ConfigEntryResponse::from(entry)))
}

/// Upsert a setting. Takes effect on next use; the SMTP transport reads
/// these at startup.
async fn put_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(body): Json<UpdateConfigEntry>,
) -> Result<Json<ConfigEntryResponse>> {
    let saved = config_store::set_value(&state.db, &key, &body.value, body.description).await?;
    Ok(Json(ConfigEntryResponse::from(saved)))
}
