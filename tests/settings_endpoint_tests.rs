//! Settings endpoint tests
//!
//! Covers:
//! - `GET /api/settings` — seeded rows listed
//! - `GET /api/settings/{key}` — found, missing, password redaction
//! - `PUT /api/settings/{key}` — update and insert

use axum::http::StatusCode;

mod common;
use common::{build_test_app, create_test_db, create_test_user, do_get, do_json, parse_json, token_for};

use cybersensei::services::config_store;

#[tokio::test]
async fn list_includes_seeded_configuration() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    let token = token_for(&alice);
    let app = build_test_app(db);

    let (status, body) = do_get(app, "/api/settings", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let entries = parse_json(&body);
    let keys: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["key"].as_str().unwrap())
        .collect();
    assert!(keys.contains(&"phishing.enabled"));
    assert!(keys.contains(&"company.name"));
}

#[tokio::test]
async fn smtp_password_is_redacted_on_read() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    config_store::set_value(&db, "smtp.password", "hunter2", None)
        .await
        .unwrap();
    let token = token_for(&alice);
    let app = build_test_app(db);

    let (status, body) = do_get(app.clone(), "/api/settings/smtp.password", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body)["value"], "********");

    // The listing redacts too
    let (_, body) = do_get(app, "/api/settings", Some(&token)).await;
    let entries = parse_json(&body);
    let smtp = entries
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["key"] == "smtp.password")
        .unwrap();
    assert_eq!(smtp["value"], "********");
}

#[tokio::test]
async fn put_updates_and_inserts() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    let token = token_for(&alice);
    let app = build_test_app(db.clone());

    // Update an existing row
    let (status, body) = do_json(
        app.clone(),
        "PUT",
        "/api/settings/phishing.enabled",
        Some(&token),
        serde_json::json!({"value": "false"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body)["value"], "false");
    assert_eq!(
        config_store::get_bool(&db, "phishing.enabled", true).await.unwrap(),
        false
    );

    // Insert a new row
    let (status, body) = do_json(
        app,
        "PUT",
        "/api/settings/smtp.host",
        Some(&token),
        serde_json::json!({"value": "mail.corp.example", "description": "SMTP relay"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body)["value"], "mail.corp.example");
    assert_eq!(
        config_store::get_value(&db, "smtp.host").await.unwrap().as_deref(),
        Some("mail.corp.example")
    );
}

#[tokio::test]
async fn unknown_key_is_404() {
    let db = create_test_db().await;
    let alice = create_test_user(&db, "Alice", "alice@corp.example", "pw123456").await;
    let token = token_for(&alice);
    let app = build_test_app(db);

    let (status, _) = do_get(app, "/api/settings/does.not.exist", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
