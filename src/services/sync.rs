//! Synchronization agent for the central exercise server.
//!
//! Polls the central server for new exercise content and imports it,
//! upserting by the central identifier. Network calls retry up to three
//! times with doubling backoff, but only for connect and timeout errors.

use std::time::Duration;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};
use serde::Deserialize;
use serde_json::Value;

use crate::application::config::CONFIG;
use crate::application::error::Result;
use crate::models::exercise::{self, Difficulty, ExerciseType};
use crate::models::prelude::*;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_ATTEMPTS: u32 = 3;
const INITIAL_BACKOFF: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteExercise {
    pub central_id: String,
    pub version: String,
    pub topic: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub difficulty: Difficulty,
    pub payload_json: Value,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCheckResponse {
    pub update_available: bool,
    #[serde(default)]
    pub latest_version: Option<String>,
    #[serde(default)]
    pub exercises: Vec<RemoteExercise>,
    /// Central ids the server has retired; deactivated locally.
    #[serde(default)]
    pub deletions: Vec<String>,
}

pub struct SyncAgentService {
    client: reqwest::Client,
    central_url: String,
    tenant_id: String,
}

impl SyncAgentService {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            central_url: CONFIG.sync.central_url.trim_end_matches('/').to_string(),
            tenant_id: CONFIG.sync.tenant_id.clone(),
        })
    }

    /// Ask the central server whether newer content exists for this tenant.
    pub async fn check_for_updates(&self) -> Result<UpdateCheckResponse> {
        let url = format!("{}/api/updates/check", self.central_url);
        let mut backoff = INITIAL_BACKOFF;

        for attempt in 1..=MAX_ATTEMPTS {
            let outcome = self
                .client
                .get(&url)
                .query(&[
                    ("tenantId", self.tenant_id.as_str()),
                    ("version", CONFIG.version.as_str()),
                ])
                .send()
                .await;

            match outcome {
                Ok(response) => {
                    let response = response.error_for_status()?;
                    return Ok(response.json::<UpdateCheckResponse>().await?);
                }
                Err(e) if (e.is_timeout() || e.is_connect()) && attempt < MAX_ATTEMPTS => {
                    tracing::warn!(
                        attempt,
                        error = %e,
                        "Update check failed, retrying after backoff"
                    );
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                }
                Err(e) => return Err(e.into()),
            }
        }

        unreachable!("retry loop always returns")
    }

    /// Upsert exercises from the central server by central_id. Returns
    /// how many rows were written.
    pub async fn import_exercises(
        &self,
        db: &DatabaseConnection,
        exercises: Vec<RemoteExercise>,
    ) -> Result<usize> {
        let now = Utc::now();
        let mut written = 0;

        for remote in exercises {
            let existing = Exercise::find()
                .filter(exercise::Column::CentralId.eq(remote.central_id.as_str()))
                .one(db)
                .await?;

            match existing {
                Some(local) => {
                    // Same version means nothing to do
                    if local.version.as_deref() == Some(remote.version.as_str()) {
                        continue;
                    }
                    let mut active = local.into_active_model();
                    active.version = Set(Some(remote.version));
                    active.topic = Set(remote.topic);
                    active.exercise_type = Set(remote.exercise_type);
                    active.difficulty = Set(remote.difficulty);
                    active.payload_json = Set(remote.payload_json);
                    active.active = Set(remote.active);
                    active.synced_at = Set(Some(now));
                    active.updated_at = Set(now);
                    active.update(db).await?;
                }
                None => {
                    let fresh = exercise::ActiveModel {
                        central_id: Set(Some(remote.central_id)),
                        version: Set(Some(remote.version)),
                        synced_at: Set(Some(now)),
                        topic: Set(remote.topic),
                        exercise_type: Set(remote.exercise_type),
                        difficulty: Set(remote.difficulty),
                        payload_json: Set(remote.payload_json),
                        active: Set(remote.active),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    fresh.insert(db).await?;
                }
            }
            written += 1;
        }

        Ok(written)
    }

    /// Deactivate local exercises whose central id the server has
    /// retired. Unknown and already-inactive ids are skipped. Returns
    /// how many rows were deactivated.
    pub async fn deactivate_exercises(
        &self,
        db: &DatabaseConnection,
        central_ids: &[String],
    ) -> Result<usize> {
        let now = Utc::now();
        let mut removed = 0;

        for central_id in central_ids {
            let existing = Exercise::find()
                .filter(exercise::Column::CentralId.eq(central_id.as_str()))
                .one(db)
                .await?;

            let Some(local) = existing else {
                continue;
            };
            if !local.active {
                continue;
            }

            let mut active = local.into_active_model();
            active.active = Set(false);
            active.synced_at = Set(Some(now));
            active.updated_at = Set(now);
            active.update(db).await?;
            removed += 1;
        }

        Ok(removed)
    }

    /// One full sync pass: check, apply deletions, then import whatever
    /// came back.
    pub async fn run_sync(&self, db: &DatabaseConnection) -> Result<()> {
        let check = self.check_for_updates().await?;
        if !check.update_available {
            tracing::debug!("Central server reports no updates");
            return Ok(());
        }

        let removed = self.deactivate_exercises(db, &check.deletions).await?;
        let count = self.import_exercises(db, check.exercises).await?;
        tracing::info!(
            count,
            removed,
            latest_version = check.latest_version.as_deref().unwrap_or("unknown"),
            "Imported exercises from central server"
        );
        Ok(())
    }
}
