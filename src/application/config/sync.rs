use std::env;

#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Base URL of the central server.
    pub central_url: String,
    /// Tenant identifier sent with update checks.
    pub tenant_id: String,
}

impl SyncConfig {
    pub fn from_env() -> Self {
        Self {
            central_url: env::var("CYBERSENSEI_CENTRAL_URL")
                .unwrap_or_else(|_| "https://central.cybersensei.io".to_string()),
            tenant_id: env::var("CYBERSENSEI_TENANT_ID").unwrap_or_else(|_| "default".to_string()),
        }
    }
}
