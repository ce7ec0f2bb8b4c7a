use std::env;

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for signing access tokens.
    pub jwt_secret: String,
    /// Access token lifetime in seconds.
    pub token_ttl_secs: i64,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: env::var("CYBERSENSEI_JWT_SECRET")
                .unwrap_or_else(|_| "change-me-in-production".to_string()),
            token_ttl_secs: env::var("CYBERSENSEI_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8 * 60 * 60),
        }
    }
}
