use std::env;

/// Static SMTP fallback values. The live values are resolved from the
/// `configs` table at startup; these apply when the store has no matching
/// key or the store read fails.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl MailConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("CYBERSENSEI_SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            port: env::var("CYBERSENSEI_SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(587),
            username: env::var("CYBERSENSEI_SMTP_USERNAME").unwrap_or_default(),
            password: env::var("CYBERSENSEI_SMTP_PASSWORD").unwrap_or_default(),
        }
    }
}
