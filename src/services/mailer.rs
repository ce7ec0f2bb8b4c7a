//! Outbound mail over SMTP.
//!
//! SMTP settings live in the `configs` table so admins can change them
//! without redeploying. Resolution falls back per key to the static
//! defaults, and any failure while reading or parsing the rows applies
//! the full default set instead of aborting startup.

use std::time::Duration;

use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use sea_orm::DatabaseConnection;

use crate::application::config::CONFIG;
use crate::application::error::Result;
use crate::services::config_store;

const SMTP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl SmtpSettings {
    pub fn defaults() -> Self {
        Self {
            host: CONFIG.mail.host.clone(),
            port: CONFIG.mail.port,
            username: CONFIG.mail.username.clone(),
            password: CONFIG.mail.password.clone(),
        }
    }

    /// Merge database overrides onto the defaults. A present but
    /// unparseable port is an error; missing keys fall back per key.
    fn from_overrides(
        host: Option<String>,
        port: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> anyhow::Result<Self> {
        let defaults = Self::defaults();
        let port = match port {
            Some(raw) => raw.trim().parse::<u16>()?,
            None => defaults.port,
        };
        Ok(Self {
            host: host.unwrap_or(defaults.host),
            port,
            username: username.unwrap_or(defaults.username),
            password: password.unwrap_or(defaults.password),
        })
    }

    async fn try_resolve(db: &DatabaseConnection) -> anyhow::Result<Self> {
        let host = config_store::get_value(db, "smtp.host").await?;
        let port = config_store::get_value(db, "smtp.port").await?;
        let username = config_store::get_value(db, "smtp.username").await?;
        let password = config_store::get_value(db, "smtp.password").await?;
        Self::from_overrides(host, port, username, password)
    }

    /// Resolve settings from the database, never failing: any error
    /// applies the entire default set.
    pub async fn resolve(db: &DatabaseConnection) -> Self {
        match Self::try_resolve(db).await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to resolve SMTP settings, using defaults");
                Self::defaults()
            }
        }
    }
}

pub struct MailerService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl MailerService {
    /// Build the transport from database-resolved settings. STARTTLS is
    /// required; connect and I/O are capped at five seconds. Stored
    /// settings that fail to build a transport fall back to the static
    /// defaults, so a bad configs row can never prevent startup.
    pub async fn from_db(db: &DatabaseConnection) -> Result<Self> {
        let settings = SmtpSettings::resolve(db).await;
        match Self::with_settings(&settings) {
            Ok(mailer) => Ok(mailer),
            Err(e) => {
                tracing::warn!(error = %e, "Stored SMTP settings are unusable, using defaults");
                Self::with_settings(&SmtpSettings::defaults())
            }
        }
    }

    pub fn with_settings(settings: &SmtpSettings) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        let from_address = if settings.username.contains('@') {
            settings.username.clone()
        } else {
            "no-reply@cybersensei.local".to_string()
        };
        let from: Mailbox = format!("CyberSensei <{}>", from_address).parse()?;

        Ok(Self { transport, from })
    }

    pub async fn send_html(&self, to: &str, subject: &str, html: &str, text: &str) -> Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(
                text.to_string(),
                html.to_string(),
            ))
            .map_err(|e| crate::application::error::AppError::Internal(e.to_string()))?;

        self.transport.send(message).await?;
        Ok(())
    }
}
