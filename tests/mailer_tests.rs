//! SMTP settings resolution tests
//!
//! The transport settings live in the configs table. Resolution must
//! fall back per key, and apply the full default set when anything in
//! the store is unusable.

mod common;
use common::create_test_db;

use cybersensei::services::config_store;
use cybersensei::services::mailer::{MailerService, SmtpSettings};

#[tokio::test]
async fn missing_rows_fall_back_per_key() {
    let db = create_test_db().await;
    config_store::set_value(&db, "smtp.host", "mail.corp.example", None)
        .await
        .unwrap();

    let settings = SmtpSettings::resolve(&db).await;
    let defaults = SmtpSettings::defaults();
    assert_eq!(settings.host, "mail.corp.example");
    assert_eq!(settings.port, defaults.port);
    assert_eq!(settings.username, defaults.username);
    assert_eq!(settings.password, defaults.password);
}

#[tokio::test]
async fn full_override_set_is_used() {
    let db = create_test_db().await;
    config_store::set_value(&db, "smtp.host", "smtp.internal", None).await.unwrap();
    config_store::set_value(&db, "smtp.port", "2525", None).await.unwrap();
    config_store::set_value(&db, "smtp.username", "mailer@corp.example", None)
        .await
        .unwrap();
    config_store::set_value(&db, "smtp.password", "pw", None).await.unwrap();

    let settings = SmtpSettings::resolve(&db).await;
    assert_eq!(
        settings,
        SmtpSettings {
            host: "smtp.internal".to_string(),
            port: 2525,
            username: "mailer@corp.example".to_string(),
            password: "pw".to_string(),
        }
    );
}

#[tokio::test]
async fn bad_port_applies_the_entire_default_set() {
    let db = create_test_db().await;
    config_store::set_value(&db, "smtp.host", "smtp.internal", None).await.unwrap();
    config_store::set_value(&db, "smtp.port", "not-a-number", None).await.unwrap();

    let settings = SmtpSettings::resolve(&db).await;
    // Not just the port: the valid host override is discarded too
    assert_eq!(settings, SmtpSettings::defaults());
}

#[tokio::test]
async fn transport_builds_from_resolved_settings() {
    let db = create_test_db().await;
    let mailer = MailerService::from_db(&db).await;
    assert!(mailer.is_ok());
}

#[tokio::test]
async fn unusable_stored_username_does_not_fail_transport_setup() {
    let db = create_test_db().await;
    // Contains '@' so it is used as the sender mailbox, but it cannot
    // be parsed as an address
    config_store::set_value(&db, "smtp.username", "broken@@corp", None)
        .await
        .unwrap();

    let mailer = MailerService::from_db(&db).await;
    assert!(mailer.is_ok());
}
