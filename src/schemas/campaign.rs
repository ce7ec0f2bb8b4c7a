use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::phishing_campaign;

#[derive(Debug, Clone, Serialize)]
pub struct CampaignResponse {
    pub id: i64,
    pub template_id: i64,
    pub sent_at: DateTime<Utc>,
    pub total_sent: i32,
    pub total_clicked: i32,
    pub total_opened: i32,
    pub total_reported: i32,
    pub click_rate: f64,
    pub open_rate: f64,
    pub report_rate: f64,
}

impl From<phishing_campaign::Model> for CampaignResponse {
    fn from(campaign: phishing_campaign::Model) -> Self {
        Self {
            id: campaign.id,
            template_id: campaign.template_id,
            sent_at: campaign.sent_at,
            total_sent: campaign.total_sent,
            total_clicked: campaign.total_clicked,
            total_opened: campaign.total_opened,
            total_reported: campaign.total_reported,
            click_rate: rate(campaign.total_clicked, campaign.total_sent),
            open_rate: rate(campaign.total_opened, campaign.total_sent),
            report_rate: rate(campaign.total_reported, campaign.total_sent),
        }
    }
}

/// Percentage of `count` over `total`; 0.0 when nothing was sent.
pub fn rate(count: i32, total: i32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(count) * 100.0 / f64::from(total)
    }
}
