use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::AuthenticatedUser;
use crate::models::prelude::*;
use crate::models::user::{self, UserRole};
use crate::schemas::user::{CreateUser, UpdateUser, UserResponse};
use crate::services::auth::hash_password;
use crate::state::AppState;

/// Create user routes
pub fn users_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/me", get(get_current_user))
        .route("/{user_id}", get(get_user).patch(update_user))
        .with_state(state)
}

async fn get_current_user(
    Extension(AuthenticatedUser(current)): Extension<AuthenticatedUser>,
) -> Json<UserResponse> {
    Json(UserResponse::from(current))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>> {
    let users = User::find()
        .order_by_asc(user::Column::Id)
        .all(&state.db)
        .await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>> {
    let found = User::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;
    Ok(Json(UserResponse::from(found)))
}

async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUser>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    body.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let duplicate = User::find()
        .filter(user::Column::Email.eq(body.email.as_str()))
        .one(&state.db)
        .await?;
    if duplicate.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let password_hash = match body.password.as_deref() {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };

    let new_user = user::ActiveModel {
        ms_teams_id: Set(body.ms_teams_id),
        name: Set(body.name),
        email: Set(body.email),
        role: Set(body.role.unwrap_or(UserRole::Employee)),
        department: Set(body.department),
        password_hash: Set(password_hash),
        active: Set(true),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let created = new_user.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(created))))
}

async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(body): Json<UpdateUser>,
) -> Result<Json<UserResponse>> {
    let existing = User::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    let mut active = existing.into_active_model();
    if let Some(name) = body.name {
        active.name = Set(name);
    }
    if let Some(email) = body.email {
        let taken = User::find()
            .filter(user::Column::Email.eq(email.as_str()))
            .filter(user::Column::Id.ne(user_id))
            .one(&state.db)
            .await?;
        if taken.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }
        active.email = Set(email);
    }
    if let Some(role) = body.role {
        active.role = Set(role);
    }
    if let Some(department) = body.department {
        active.department = Set(Some(department));
    }
    if let Some(is_active) = body.active {
        active.active = Set(is_active);
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(UserResponse::from(updated)))
}
