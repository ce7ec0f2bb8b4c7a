//! Gamification service tests
//!
//! Covers badge idempotency, module completion, leveling and the
//! progression endpoints.

use axum::http::StatusCode;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

mod common;
use common::{
    build_test_app, create_test_db, create_test_exercise, create_test_user, do_get, parse_json,
    token_for,
};

use cybersensei::models::exercise::ExerciseType;
use cybersensei::models::prelude::*;
use cybersensei::models::{badge, user_badge};
use cybersensei::services::progression;

async fn badge_by_name(db: &sea_orm::DatabaseConnection, name: &str) -> badge::Model {
    Badge::find()
        .filter(badge::Column::Name.eq(name))
        .one(db)
        .await
        .unwrap()
        .expect("seeded badge missing")
}

#[tokio::test]
async fn badge_is_awarded_at_most_once() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    let week_streak = badge_by_name(&db, "week_streak").await;

    assert!(progression::award_badge(&db, alice.id, &week_streak).await.unwrap());
    assert!(!progression::award_badge(&db, alice.id, &week_streak).await.unwrap());

    let rows = UserBadge::find()
        .filter(user_badge::Column::UserId.eq(alice.id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);

    // Counters did not double-increment
    let level = progression::ensure_level(&db, alice.id).await.unwrap();
    assert_eq!(level.total_badges, 1);
    assert_eq!(level.total_xp, week_streak.points);
}

#[tokio::test]
async fn completing_a_module_awards_its_badge() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    let ex = create_test_exercise(&db, "phishing_awareness", ExerciseType::Quiz, true).await;

    // The seeded module needs five completions
    for _ in 0..5 {
        progression::record_result(&db, alice.id, &ex, 90.0, None, None, None)
            .await
            .unwrap();
    }

    let level = progression::ensure_level(&db, alice.id).await.unwrap();
    assert_eq!(level.modules_completed, 1);

    let module_badge = badge_by_name(&db, "phishing_module").await;
    let earned = UserBadge::find()
        .filter(user_badge::Column::UserId.eq(alice.id))
        .filter(user_badge::Column::BadgeId.eq(module_badge.id))
        .one(&db)
        .await
        .unwrap();
    assert!(earned.is_some());

    // A sixth submission must not complete the module twice
    progression::record_result(&db, alice.id, &ex, 90.0, None, None, None)
        .await
        .unwrap();
    let level = progression::ensure_level(&db, alice.id).await.unwrap();
    assert_eq!(level.modules_completed, 1);

    // The module listing surfaces the earned module badge
    let modules = progression::module_progress(&db, alice.id).await.unwrap();
    let phishing = modules
        .iter()
        .find(|m| m.module_name == "phishing_awareness")
        .unwrap();
    assert!(phishing.badge_earned);

    // And the suggestion moves past the completed module
    let dashboard = progression::dashboard(&db, alice.id).await.unwrap();
    assert_eq!(
        dashboard.suggested_next_module.as_deref(),
        Some("password_security")
    );
}

#[tokio::test]
async fn explicit_success_flag_overrides_threshold() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    let ex = create_test_exercise(&db, "password_security", ExerciseType::Scenario, true).await;

    let stored = progression::record_result(&db, alice.id, &ex, 40.0, Some(true), None, None)
        .await
        .unwrap();
    assert!(stored.success);

    let stored = progression::record_result(&db, alice.id, &ex, 95.0, Some(false), None, None)
        .await
        .unwrap();
    assert!(!stored.success);
}

#[tokio::test]
async fn dashboard_and_modules_endpoints() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    let ex = create_test_exercise(&db, "phishing_awareness", ExerciseType::Quiz, true).await;
    progression::record_result(&db, alice.id, &ex, 80.0, None, None, None)
        .await
        .unwrap();
    let token = token_for(&alice);
    let app = build_test_app(db);

    let (status, body) = do_get(
        app.clone(),
        &format!("/api/progression/dashboard/{}", alice.id),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let dashboard = parse_json(&body);
    assert_eq!(dashboard["current_level"], 1);
    assert_eq!(dashboard["rank"], "BEGINNER");
    assert_eq!(dashboard["name"], "Alice");
    assert_eq!(dashboard["email"], "alice@corp.example");
    assert_eq!(dashboard["total_exercises_completed"], 1);
    // One of five exercises done in one of four modules
    assert_eq!(dashboard["overall_completion"], 5.0);
    assert_eq!(dashboard["average_score"], 80.0);
    // The only started module is also the first incomplete one
    assert_eq!(dashboard["suggested_next_module"], "phishing_awareness");
    // The first-exercise badge was earned along the way
    let badges = dashboard["badges"].as_array().unwrap();
    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0]["name"], "first_steps");

    let (status, body) = do_get(
        app.clone(),
        &format!("/api/progression/modules/{}", alice.id),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let modules = parse_json(&body);
    // All four seeded modules listed, untouched ones as NOT_STARTED
    assert_eq!(modules.as_array().unwrap().len(), 4);
    let untouched = modules
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["module_name"] == "data_protection")
        .unwrap();
    assert_eq!(untouched["status"], "NOT_STARTED");
    assert_eq!(untouched["completion_percentage"], 0.0);
    assert_eq!(untouched["badge_earned"], false);

    let (status, _) = do_get(app, "/api/progression/dashboard/99999", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn badge_endpoints_list_earned_and_all() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    let first_steps = badge_by_name(&db, "first_steps").await;
    progression::award_badge(&db, alice.id, &first_steps).await.unwrap();
    let token = token_for(&alice);
    let app = build_test_app(db);

    let (status, body) = do_get(
        app.clone(),
        &format!("/api/badges/user/{}", alice.id),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let earned = parse_json(&body);
    assert_eq!(earned.as_array().unwrap().len(), 1);
    assert_eq!(earned[0]["name"], "first_steps");
    assert_eq!(earned[0]["earned"], true);

    let (status, body) = do_get(
        app,
        &format!("/api/badges/all/{}", alice.id),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let all = parse_json(&body);
    // All seven seeded badges, exactly one flagged earned
    assert_eq!(all.as_array().unwrap().len(), 7);
    let earned_count = all
        .as_array()
        .unwrap()
        .iter()
        .filter(|b| b["earned"] == true)
        .count();
    assert_eq!(earned_count, 1);
}
