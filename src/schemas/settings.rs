use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::config_entry;

const REDACTED: &str = "********";

#[derive(Debug, Clone, Serialize)]
pub struct ConfigEntryResponse {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<config_entry::Model> for ConfigEntryResponse {
    fn from(entry: config_entry::Model) -> Self {
        // Secrets never leave the API in the clear
        let value = if entry.key == "smtp.password" {
            REDACTED.to_string()
        } else {
            entry.value
        };
        Self {
            key: entry.key,
            value,
            description: entry.description,
            updated_at: entry.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateConfigEntry {
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smtp_password_is_redacted() {
        let entry = config_entry::Model {
            id: 1,
            key: "smtp.password".to_string(),
            value: "hunter2".to_string(),
            description: None,
            updated_at: Utc::now(),
        };
        let resp = ConfigEntryResponse::from(entry);
        assert_eq!(resp.value, "********");
    }

    #[test]
    fn other_values_pass_through() {
        let entry = config_entry::Model {
            id: 1,
            key: "smtp.host".to_string(),
            value: "mail.example.com".to_string(),
            description: None,
            updated_at: Utc::now(),
        };
        let resp = ConfigEntryResponse::from(entry);
        assert_eq!(resp.value, "mail.example.com");
    }
}
