//! Phishing simulation campaigns.

use chrono::Utc;
use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QuerySelect, Set,
};
use uuid::Uuid;

use crate::application::config::CONFIG;
use crate::application::error::Result;
use crate::models::prelude::*;
use crate::models::{phishing_campaign, phishing_template, phishing_tracker, user};
use crate::services::{config_store, mailer::MailerService};

pub struct TemplateContext<'a> {
    pub user_name: &'a str,
    pub user_email: &'a str,
    pub company_name: &'a str,
    pub tracking_base_url: &'a str,
    pub token: &'a str,
}

/// Substitute the supported template variables. Unknown placeholders are
/// left as-is.
pub fn render_template(content: &str, ctx: &TemplateContext<'_>) -> String {
    content
        .replace("{{USER_NAME}}", ctx.user_name)
        .replace("{{USER_EMAIL}}", ctx.user_email)
        .replace("{{COMPANY_NAME}}", ctx.company_name)
        .replace(
            "{{TRACKING_PIXEL}}",
            &format!("{}/t/pixel/{}", ctx.tracking_base_url, ctx.token),
        )
        .replace(
            "{{PHISHING_LINK}}",
            &format!("{}/t/click/{}", ctx.tracking_base_url, ctx.token),
        )
}

/// Uniformly random active template, if any exist.
pub async fn random_active_template(
    db: &DatabaseConnection,
) -> Result<Option<phishing_template::Model>> {
    let base = PhishingTemplate::find().filter(phishing_template::Column::Active.eq(true));
    let total = base.clone().count(db).await?;
    if total == 0 {
        return Ok(None);
    }

    let offset = rand::rng().random_range(0..total);
    Ok(base.offset(offset).limit(1).one(db).await?)
}

/// Send one campaign to every active user using a randomly chosen
/// template. Returns None when campaigns are disabled or no template is
/// available. Individual send failures are logged and skipped.
pub async fn launch_campaign(
    db: &DatabaseConnection,
    mailer: &MailerService,
) -> Result<Option<phishing_campaign::Model>> {
    if !config_store::get_bool(db, "phishing.enabled", CONFIG.phishing.enabled).await? {
        tracing::info!("Phishing campaigns are disabled, skipping launch");
        return Ok(None);
    }

    let Some(template) = random_active_template(db).await? else {
        tracing::warn!("No active phishing template, skipping campaign");
        return Ok(None);
    };

    let recipients = User::find()
        .filter(user::Column::Active.eq(true))
        .all(db)
        .await?;
    if recipients.is_empty() {
        tracing::info!("No active users to target, skipping campaign");
        return Ok(None);
    }

    let now = Utc::now();
    let campaign = phishing_campaign::ActiveModel {
        template_id: Set(template.id),
        sent_at: Set(now),
        total_sent: Set(0),
        total_clicked: Set(0),
        total_opened: Set(0),
        total_reported: Set(0),
        ..Default::default()
    };
    let campaign = campaign.insert(db).await?;

    let company_name = config_store::get_value_or(db, "company.name", "CyberSensei").await?;
    let base_url = CONFIG.phishing.tracking_base_url.trim_end_matches('/');

    // total_sent counts targeted recipients, matching the tracker rows
    // the stats recount works from
    let total_sent = recipients.len() as i32;

    let mut delivered = 0;
    for recipient in recipients {
        let token = Uuid::new_v4().to_string();

        let tracker = phishing_tracker::ActiveModel {
            token: Set(token.clone()),
            user_id: Set(recipient.id),
            campaign_id: Set(campaign.id),
            clicked: Set(false),
            clicked_at: Set(None),
            opened: Set(false),
            opened_at: Set(None),
            reported: Set(false),
            reported_at: Set(None),
            sent_at: Set(now),
            ..Default::default()
        };
        tracker.insert(db).await?;

        let ctx = TemplateContext {
            user_name: &recipient.name,
            user_email: &recipient.email,
            company_name: &company_name,
            tracking_base_url: base_url,
            token: &token,
        };
        let subject = render_template(&template.subject, &ctx);
        let html = render_template(&template.html_content, &ctx);
        let text = render_template(&template.text_content, &ctx);

        match mailer.send_html(&recipient.email, &subject, &html, &text).await {
            Ok(()) => delivered += 1,
            Err(e) => {
                tracing::warn!(user_id = recipient.id, error = %e, "Failed to send phishing mail");
            }
        }
    }

    let campaign_id = campaign.id;
    let mut active = campaign.into_active_model();
    active.total_sent = Set(total_sent);
    let campaign = active.update(db).await?;

    tracing::info!(
        campaign_id,
        template_id = template.id,
        total_sent,
        delivered,
        "Phishing campaign launched"
    );
    Ok(Some(campaign))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_all_variables() {
        let ctx = TemplateContext {
            user_name: "Alice",
            user_email: "alice@corp.example",
            company_name: "Acme",
            tracking_base_url: "https://train.acme.example",
            token: "tok-123",
        };
        let out = render_template(
            "Hi {{USER_NAME}} ({{USER_EMAIL}}) at {{COMPANY_NAME}}: \
             <img src=\"{{TRACKING_PIXEL}}\"> <a href=\"{{PHISHING_LINK}}\">here</a>",
            &ctx,
        );
        assert!(out.contains("Hi Alice (alice@corp.example) at Acme"));
        assert!(out.contains("https://train.acme.example/t/pixel/tok-123"));
        assert!(out.contains("https://train.acme.example/t/click/tok-123"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let ctx = TemplateContext {
            user_name: "Bob",
            user_email: "bob@corp.example",
            company_name: "Acme",
            tracking_base_url: "http://localhost:8080",
            token: "t",
        };
        let out = render_template("{{SOMETHING_ELSE}} {{USER_NAME}}", &ctx);
        assert_eq!(out, "{{SOMETHING_ELSE}} Bob");
    }
}
