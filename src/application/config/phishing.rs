use std::env;

#[derive(Debug, Clone)]
pub struct PhishingConfig {
    /// Master switch; campaigns are additionally gated by the
    /// `phishing.enabled` row in the configs table.
    pub enabled: bool,
    /// Base URL embedded in tracking pixel and link URLs.
    pub tracking_base_url: String,
}

impl PhishingConfig {
    pub fn from_env() -> Self {
        Self {
            enabled: env::var("CYBERSENSEI_PHISHING_ENABLED")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(true),
            tracking_base_url: env::var("CYBERSENSEI_TRACKING_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        }
    }
}
