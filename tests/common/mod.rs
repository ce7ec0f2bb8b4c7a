//! Test helpers and utilities for integration testing.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;
use tower::util::ServiceExt;

use cybersensei::endpoints::create_router;
use cybersensei::migrations::Migrator;
use cybersensei::models::exercise::{Difficulty, ExerciseType};
use cybersensei::models::user::UserRole;
use cybersensei::models::{exercise, phishing_template, user};
use cybersensei::services::auth::{create_access_token, hash_password};
use cybersensei::services::mailer::{MailerService, SmtpSettings};
use cybersensei::state::AppState;

/// Create an in-memory SQLite database for testing
pub async fn create_test_db() -> DatabaseConnection {
    // Each connection gets its own database
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run test migrations");

    db
}

/// Build the full router on top of a test database
pub fn build_test_app(db: DatabaseConnection) -> Router {
    let mailer =
        MailerService::with_settings(&SmtpSettings::defaults()).expect("Failed to build mailer");
    let state = AppState::new(db, Arc::new(mailer));
    create_router(state)
}

/// Create a test user with a bcrypt-hashed password
pub async fn create_test_user(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    password: &str,
) -> user::Model {
    let hashed = hash_password(password).unwrap();

    let new_user = user::ActiveModel {
        ms_teams_id: Set(None),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        role: Set(UserRole::Employee),
        department: Set(None),
        password_hash: Set(Some(hashed)),
        active: Set(true),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    new_user.insert(db).await.unwrap()
}

/// Bearer token for a user, minted directly
pub fn token_for(user: &user::Model) -> String {
    create_access_token(user).unwrap()
}

/// Insert an active exercise for a topic
pub async fn create_test_exercise(
    db: &DatabaseConnection,
    topic: &str,
    exercise_type: ExerciseType,
    active: bool,
) -> exercise::Model {
    let now = chrono::Utc::now();
    let new_exercise = exercise::ActiveModel {
        central_id: Set(None),
        version: Set(None),
        synced_at: Set(None),
        topic: Set(topic.to_string()),
        exercise_type: Set(exercise_type),
        difficulty: Set(Difficulty::Beginner),
        payload_json: Set(serde_json::json!({"question": "?"})),
        active: Set(active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    new_exercise.insert(db).await.unwrap()
}

/// Insert an active phishing template using all supported variables
pub async fn create_test_template(db: &DatabaseConnection) -> phishing_template::Model {
    let template = phishing_template::ActiveModel {
        label: Set("it-support".to_string()),
        subject: Set("Action required for {{USER_NAME}}".to_string()),
        html_content: Set(
            "<p>Hi {{USER_NAME}},</p><a href=\"{{PHISHING_LINK}}\">Verify</a>\
             <img src=\"{{TRACKING_PIXEL}}\">"
                .to_string(),
        ),
        text_content: Set("Hi {{USER_NAME}}, visit {{PHISHING_LINK}}".to_string()),
        template_type: Set("CREDENTIAL".to_string()),
        active: Set(true),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    template.insert(db).await.unwrap()
}

/// GET with an optional bearer token, returning (status, body)
pub async fn do_get(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().uri(uri).method("GET");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
    response_parts(response).await
}

/// Send a JSON body with an optional bearer token, returning (status, body)
pub async fn do_json(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> (StatusCode, String) {
    let mut builder = Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let response = app
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();
    response_parts(response).await
}

pub async fn response_parts(response: axum::response::Response) -> (StatusCode, String) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).to_string())
}

pub fn parse_json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or_else(|_| panic!("Body is not JSON: {}", body))
}
