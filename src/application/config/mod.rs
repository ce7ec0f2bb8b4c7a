pub mod auth;
pub mod database;
pub mod mail;
pub mod phishing;
pub mod server;
pub mod sync;

use once_cell::sync::Lazy;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server: server::ServerConfig,
    pub database: database::DatabaseConfig,
    pub auth: auth::AuthConfig,
    pub mail: mail::MailConfig,
    pub phishing: phishing::PhishingConfig,
    pub sync: sync::SyncConfig,

    pub version: String,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server: server::ServerConfig::from_env(),
            database: database::DatabaseConfig::from_env(),
            auth: auth::AuthConfig::from_env(),
            mail: mail::MailConfig::from_env(),
            phishing: phishing::PhishingConfig::from_env(),
            sync: sync::SyncConfig::from_env(),

            version: env!("CARGO_PKG_VERSION").to_string(),

            log_level: env::var("CYBERSENSEI_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
