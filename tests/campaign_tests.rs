//! Phishing campaign launch and listing tests
//!
//! The SMTP relay is unreachable in tests, so launches exercise the
//! per-recipient failure path: trackers are created, sends are logged
//! as failures, and total_sent still counts every targeted recipient.

use axum::http::StatusCode;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;

mod common;
use common::{
    build_test_app, create_test_db, create_test_template, create_test_user, do_get, parse_json,
    token_for,
};

use cybersensei::models::phishing_tracker;
use cybersensei::models::prelude::*;
use cybersensei::services::mailer::{MailerService, SmtpSettings};
use cybersensei::services::{config_store, phishing};

fn test_mailer() -> Arc<MailerService> {
    // Port 1 is never an SMTP relay; sends fail fast
    let settings = SmtpSettings {
        host: "127.0.0.1".to_string(),
        port: 1,
        username: "mailer@corp.example".to_string(),
        password: "pw".to_string(),
    };
    Arc::new(MailerService::with_settings(&settings).unwrap())
}

#[tokio::test]
async fn launch_creates_one_tracker_per_active_user() {
    let db = create_test_db().await;
    create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    create_test_user(&db, "Bob", "bob@corp.example", "pw123456").await;
    create_test_template(&db).await;

    let campaign = phishing::launch_campaign(&db, &test_mailer())
        .await
        .unwrap()
        .expect("campaign should launch");

    let trackers = PhishingTracker::find()
        .filter(phishing_tracker::Column::CampaignId.eq(campaign.id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(trackers.len(), 2);

    // Tokens are unique per recipient
    assert_ne!(trackers[0].token, trackers[1].token);

    // Every send failed against the dead relay; the campaign still
    // counts both targeted recipients
    assert_eq!(campaign.total_sent, 2);
}

#[tokio::test]
async fn launch_respects_the_kill_switch() {
    let db = create_test_db().await;
    create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    create_test_template(&db).await;
    config_store::set_value(&db, "phishing.enabled", "false", None)
        .await
        .unwrap();

    let outcome = phishing::launch_campaign(&db, &test_mailer()).await.unwrap();
    assert!(outcome.is_none());
    assert_eq!(PhishingCampaign::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn launch_without_templates_is_a_noop() {
    let db = create_test_db().await;
    create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;

    let outcome = phishing::launch_campaign(&db, &test_mailer()).await.unwrap();
    assert!(outcome.is_none());
}

#[tokio::test]
async fn campaign_endpoints_expose_derived_rates() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    create_test_user(&db, "Bob", "bob@corp.example", "pw123456").await;
    create_test_template(&db).await;
    let campaign = phishing::launch_campaign(&db, &test_mailer())
        .await
        .unwrap()
        .unwrap();

    // One of the two recipients clicks
    let tracker = PhishingTracker::find()
        .filter(phishing_tracker::Column::CampaignId.eq(campaign.id))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    cybersensei::services::tracking::track_click(&db, &tracker.token)
        .await
        .unwrap();

    let token = token_for(&alice);
    let app = build_test_app(db);

    let (status, body) = do_get(app.clone(), "/api/phishing/campaigns", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let campaigns = parse_json(&body);
    assert_eq!(campaigns.as_array().unwrap().len(), 1);
    // Counters recomputed from trackers: 2 sent, 1 clicked
    assert_eq!(campaigns[0]["total_sent"], 2);
    assert_eq!(campaigns[0]["click_rate"], 50.0);
    assert_eq!(campaigns[0]["open_rate"], 50.0);

    let (status, body) = do_get(
        app.clone(),
        &format!("/api/phishing/campaigns/{}", campaign.id),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body)["report_rate"], 0.0);

    let (status, _) = do_get(app, "/api/phishing/campaigns/99999", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
