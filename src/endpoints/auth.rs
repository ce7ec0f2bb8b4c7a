use axum::{extract::State, routing::post, Json, Router};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::error::{AppError, Result};
use crate::models::prelude::*;
use crate::models::user;
use crate::schemas::user::{LoginRequest, LoginResponse, UserResponse};
use crate::services::auth::{create_access_token, verify_password};
use crate::state::AppState;

pub fn auth_routes(state: AppState) -> Router {
    Router::new().route("/login", post(login)).with_state(state)
}

/// Password login. Inactive accounts and accounts without a password
/// (e.g. Teams-provisioned) cannot log in this way.
async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let invalid = || AppError::Unauthorized("Invalid email or password".to_string());

    let account = User::find()
        .filter(user::Column::Email.eq(body.email.as_str()))
        .one(&state.db)
        .await?
        .ok_or_else(invalid)?;

    if !account.active {
        return Err(invalid());
    }

    let hash = account.password_hash.as_deref().ok_or_else(invalid)?;
    if !verify_password(&body.password, hash)? {
        return Err(invalid());
    }

    let token = create_access_token(&account)?;
    Ok(Json(LoginResponse {
        token,
        user: UserResponse::from(account),
    }))
}
