use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::{self, UserRole};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub ms_teams_id: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub department: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub ms_teams_id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            ms_teams_id: user.ms_teams_id,
            name: user.name,
            email: user.email,
            role: user.role,
            department: user.department,
            active: user.active,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}
