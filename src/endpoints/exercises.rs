use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::error::{AppError, Result};
use crate::middleware::AuthenticatedUser;
use crate::models::exercise;
use crate::models::prelude::*;
use crate::schemas::exercise::{CreateExercise, ExerciseFilter, SubmitResult};
use crate::schemas::progress::DashboardResponse;
use crate::services::progression;
use crate::state::AppState;

pub fn exercises_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_exercises).post(create_exercise))
        .route("/random", get(random_exercise))
        .route("/{exercise_id}/submit", post(submit_result))
        .with_state(state)
}

/// Active exercises, optionally narrowed by topic, type and difficulty.
async fn list_exercises(
    State(state): State<AppState>,
    Query(filter): Query<ExerciseFilter>,
) -> Result<Json<Vec<exercise::Model>>> {
    let mut query = Exercise::find().filter(exercise::Column::Active.eq(true));

    if let Some(topic) = filter.topic {
        query = query.filter(exercise::Column::Topic.eq(topic));
    }
    if let Some(exercise_type) = filter.exercise_type {
        query = query.filter(exercise::Column::ExerciseType.eq(exercise_type));
    }
    if let Some(difficulty) = filter.difficulty {
        query = query.filter(exercise::Column::Difficulty.eq(difficulty));
    }

    let exercises = query.order_by_asc(exercise::Column::Id).all(&state.db).await?;
    Ok(Json(exercises))
}

/// Uniformly random active exercise. Count-plus-offset keeps the pick
/// database-agnostic.
pub async fn random_active_exercise(db: &DatabaseConnection) -> Result<Option<exercise::Model>> {
    let base = Exercise::find().filter(exercise::Column::Active.eq(true));
    let total = base.clone().count(db).await?;
    if total == 0 {
        return Ok(None);
    }

    let offset = rand::rng().random_range(0..total);
    Ok(base.offset(offset).limit(1).one(db).await?)
}

async fn random_exercise(State(state): State<AppState>) -> Result<Json<exercise::Model>> {
    let picked = random_active_exercise(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("No active exercises available".to_string()))?;
    Ok(Json(picked))
}

async fn create_exercise(
    State(state): State<AppState>,
    Json(body): Json<CreateExercise>,
) -> Result<(StatusCode, Json<exercise::Model>)> {
    let now = Utc::now();
    let new_exercise = exercise::ActiveModel {
        central_id: Set(None),
        version: Set(None),
        synced_at: Set(None),
        topic: Set(body.topic),
        exercise_type: Set(body.exercise_type),
        difficulty: Set(body.difficulty),
        payload_json: Set(body.payload_json),
        active: Set(body.active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = new_exercise.insert(&state.db).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Record a result for the authenticated user and return the refreshed
/// dashboard aggregates.
async fn submit_result(
    State(state): State<AppState>,
    Path(exercise_id): Path<i64>,
    Extension(AuthenticatedUser(current)): Extension<AuthenticatedUser>,
    Json(body): Json<SubmitResult>,
) -> Result<Json<DashboardResponse>> {
    if !(0.0..=100.0).contains(&body.score) {
        return Err(AppError::BadRequest(
            "Score must be between 0 and 100".to_string(),
        ));
    }

    let ex = Exercise::find_by_id(exercise_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Exercise {} not found", exercise_id)))?;

    progression::record_result(
        &state.db,
        current.id,
        &ex,
        body.score,
        body.success,
        body.duration_secs,
        body.details_json,
    )
    .await?;

    let dashboard = progression::dashboard(&state.db, current.id).await?;
    Ok(Json(dashboard))
}
