//! Database-backed runtime configuration (the `configs` table).

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};

use crate::application::error::Result;
use crate::models::config_entry;
use crate::models::prelude::*;

pub async fn get_value(db: &DatabaseConnection, key: &str) -> Result<Option<String>> {
    let entry = ConfigEntry::find()
        .filter(config_entry::Column::Key.eq(key))
        .one(db)
        .await?;
    Ok(entry.map(|e| e.value))
}

pub async fn get_value_or(db: &DatabaseConnection, key: &str, default: &str) -> Result<String> {
    Ok(get_value(db, key).await?.unwrap_or_else(|| default.to_string()))
}

/// Read a boolean flag. Anything other than "true" (case-insensitive)
/// counts as false; a missing row yields `default`.
pub async fn get_bool(db: &DatabaseConnection, key: &str, default: bool) -> Result<bool> {
    match get_value(db, key).await? {
        Some(v) => Ok(v.eq_ignore_ascii_case("true")),
        None => Ok(default),
    }
}

/// Insert or update a config row by key.
pub async fn set_value(
    db: &DatabaseConnection,
    key: &str,
    value: &str,
    description: Option<String>,
) -> Result<config_entry::Model> {
    let now = Utc::now();

    let existing = ConfigEntry::find()
        .filter(config_entry::Column::Key.eq(key))
        .one(db)
        .await?;

    let saved = match existing {
        Some(entry) => {
            let mut active = entry.into_active_model();
            active.value = Set(value.to_string());
            if description.is_some() {
                active.description = Set(description);
            }
            active.updated_at = Set(now);
            active.update(db).await?
        }
        None => {
            let active = config_entry::ActiveModel {
                key: Set(key.to_string()),
                value: Set(value.to_string()),
                description: Set(description),
                updated_at: Set(now),
                ..Default::default()
            };
            active.insert(db).await?
        }
    };

    Ok(saved)
}
