//! Company metrics tests
//!
//! Covers snapshot recalculation from raw data, the latest-wins read,
//! and the `/api/metrics/company` endpoint.

use axum::http::StatusCode;
use sea_orm::{ActiveModelTrait, Set};

mod common;
use common::{
    build_test_app, create_test_db, create_test_exercise, create_test_user, do_get, parse_json,
    token_for,
};

use cybersensei::models::exercise::ExerciseType;
use cybersensei::models::{phishing_campaign, phishing_tracker, user_exercise_result};
use cybersensei::services::metrics;

#[tokio::test]
async fn recalculate_on_empty_data_yields_zeroes() {
    let db = create_test_db().await;
    let snapshot = metrics::recalculate(&db).await.unwrap();

    assert_eq!(snapshot.average_quiz_score, 0.0);
    assert_eq!(snapshot.phishing_click_rate, 0.0);
    assert_eq!(snapshot.active_users, 0);
    assert_eq!(snapshot.completed_exercises, 0);
    // 0*0.6 + (100-0)*0.4
    assert_eq!(snapshot.score, 40.0);
}

#[tokio::test]
async fn recalculate_aggregates_quiz_scores_and_click_rate() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    let quiz = create_test_exercise(&db, "phishing_awareness", ExerciseType::Quiz, true).await;
    let scenario = create_test_exercise(&db, "password_security", ExerciseType::Scenario, true).await;

    let now = chrono::Utc::now();
    let last_month = now - chrono::Duration::days(30);
    for (exercise_id, score, completed_at) in [
        (quiz.id, 80.0, now),
        (quiz.id, 60.0, now),
        (scenario.id, 10.0, now),
        // Older than the trailing week, excluded from both aggregates
        (quiz.id, 0.0, last_month),
    ] {
        let result = user_exercise_result::ActiveModel {
            user_id: Set(alice.id),
            exercise_id: Set(exercise_id),
            score: Set(score),
            success: Set(score >= 70.0),
            duration_secs: Set(None),
            details_json: Set(None),
            completed_at: Set(completed_at),
            ..Default::default()
        };
        result.insert(&db).await.unwrap();
    }

    // An older campaign where everyone clicked, and a latest one where
    // one of two recipients clicked. Only the latest counts.
    let template = common::create_test_template(&db).await;
    let mut campaign_ids = Vec::new();
    for sent_at in [last_month, now] {
        let campaign = phishing_campaign::ActiveModel {
            template_id: Set(template.id),
            sent_at: Set(sent_at),
            total_sent: Set(2),
            total_clicked: Set(0),
            total_opened: Set(0),
            total_reported: Set(0),
            ..Default::default()
        };
        campaign_ids.push(campaign.insert(&db).await.unwrap().id);
    }
    for (token, campaign_id, clicked) in [
        ("m-1", campaign_ids[0], true),
        ("m-2", campaign_ids[0], true),
        ("m-3", campaign_ids[1], true),
        ("m-4", campaign_ids[1], false),
    ] {
        let tracker = phishing_tracker::ActiveModel {
            token: Set(token.to_string()),
            user_id: Set(alice.id),
            campaign_id: Set(campaign_id),
            clicked: Set(clicked),
            clicked_at: Set(clicked.then_some(now)),
            opened: Set(clicked),
            opened_at: Set(clicked.then_some(now)),
            reported: Set(false),
            reported_at: Set(None),
            sent_at: Set(now),
            ..Default::default()
        };
        tracker.insert(&db).await.unwrap();
    }

    let snapshot = metrics::recalculate(&db).await.unwrap();

    // Scenario results are not quiz results
    assert_eq!(snapshot.average_quiz_score, 70.0);
    assert_eq!(snapshot.phishing_click_rate, 50.0);
    assert_eq!(snapshot.active_users, 1);
    assert_eq!(snapshot.completed_exercises, 3);
    // 70*0.6 + 50*0.4 = 62
    assert_eq!(snapshot.score, 62.0);

    let latest = metrics::latest(&db).await.unwrap().unwrap();
    assert_eq!(latest.id, snapshot.id);
}

#[tokio::test]
async fn company_endpoint_computes_on_first_read() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    let token = token_for(&alice);
    let app = build_test_app(db);

    let (status, body) = do_get(app, "/api/metrics/company", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let json = parse_json(&body);
    assert_eq!(json["active_users"], 1);
    assert!(json.get("risk_level").is_some());
    assert!(json.get("score").is_some());
}
