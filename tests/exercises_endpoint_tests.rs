//! Exercise endpoint tests
//!
//! Covers:
//! - `GET /api/exercises` — active-only listing with filters
//! - `GET /api/exercises/random` — active-only uniform pick, 404 when empty
//! - `POST /api/exercises` — create
//! - `POST /api/exercises/{id}/submit` — result recording and dashboard reply

use axum::http::StatusCode;

mod common;
use common::{
    build_test_app, create_test_db, create_test_exercise, create_test_user, do_get, do_json,
    parse_json, token_for,
};

use cybersensei::models::exercise::ExerciseType;

#[tokio::test]
async fn listing_excludes_inactive_and_applies_filters() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    create_test_exercise(&db, "phishing_awareness", ExerciseType::Quiz, true).await;
    create_test_exercise(&db, "password_security", ExerciseType::Scenario, true).await;
    create_test_exercise(&db, "phishing_awareness", ExerciseType::Quiz, false).await;
    let token = token_for(&alice);
    let app = build_test_app(db);

    let (status, body) = do_get(app.clone(), "/api/exercises", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body).as_array().unwrap().len(), 2);

    let (status, body) = do_get(app.clone(), "/api/exercises?type=QUIZ", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let quizzes = parse_json(&body);
    assert_eq!(quizzes.as_array().unwrap().len(), 1);
    assert_eq!(quizzes[0]["topic"], "phishing_awareness");

    let (status, body) = do_get(
        app,
        "/api/exercises?topic=password_security",
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body).as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn random_never_returns_inactive() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    let active = create_test_exercise(&db, "phishing_awareness", ExerciseType::Quiz, true).await;
    create_test_exercise(&db, "phishing_awareness", ExerciseType::Quiz, false).await;
    create_test_exercise(&db, "password_security", ExerciseType::Quiz, false).await;
    let token = token_for(&alice);
    let app = build_test_app(db);

    // Only one active row exists, so every draw must return it
    for _ in 0..10 {
        let (status, body) = do_get(app.clone(), "/api/exercises/random", Some(&token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(parse_json(&body)["id"], active.id);
    }
}

#[tokio::test]
async fn random_is_404_when_no_active_exercises() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    create_test_exercise(&db, "phishing_awareness", ExerciseType::Quiz, false).await;
    let token = token_for(&alice);
    let app = build_test_app(db);

    let (status, _) = do_get(app, "/api/exercises/random", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_exercise_returns_created() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    let token = token_for(&alice);
    let app = build_test_app(db);

    let (status, body) = do_json(
        app,
        "POST",
        "/api/exercises",
        Some(&token),
        serde_json::json!({
            "topic": "data_protection",
            "type": "CHALLENGE",
            "difficulty": "ADVANCED",
            "payload_json": {"prompt": "Classify this document"}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let json = parse_json(&body);
    assert_eq!(json["type"], "CHALLENGE");
    assert_eq!(json["active"], true);
}

#[tokio::test]
async fn submit_records_result_and_returns_dashboard() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    let ex = create_test_exercise(&db, "phishing_awareness", ExerciseType::Quiz, true).await;
    let token = token_for(&alice);
    let app = build_test_app(db);

    let (status, body) = do_json(
        app,
        "POST",
        &format!("/api/exercises/{}/submit", ex.id),
        Some(&token),
        serde_json::json!({"score": 85.0, "duration_secs": 40}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let dashboard = parse_json(&body);
    assert_eq!(dashboard["user_id"], alice.id);
    // 10 base + 85/10 rounded, plus 10 points from the seeded first-exercise badge
    assert_eq!(dashboard["total_xp"], 29);
    assert_eq!(dashboard["total_badges"], 1);
    assert_eq!(dashboard["streak_days"], 1);
    let modules = dashboard["modules"].as_array().unwrap();
    let phishing_module = modules
        .iter()
        .find(|m| m["module_name"] == "phishing_awareness")
        .unwrap();
    assert_eq!(phishing_module["exercises_completed"], 1);
    assert_eq!(phishing_module["status"], "IN_PROGRESS");
}

#[tokio::test]
async fn submit_validates_score_and_exercise() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    let ex = create_test_exercise(&db, "phishing_awareness", ExerciseType::Quiz, true).await;
    let token = token_for(&alice);
    let app = build_test_app(db);

    let (status, _) = do_json(
        app.clone(),
        "POST",
        &format!("/api/exercises/{}/submit", ex.id),
        Some(&token),
        serde_json::json!({"score": 150.0}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = do_json(
        app,
        "POST",
        "/api/exercises/99999/submit",
        Some(&token),
        serde_json::json!({"score": 50.0}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
