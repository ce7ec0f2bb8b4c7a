use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::company_metrics::{self, RiskLevel};

#[derive(Debug, Clone, Serialize)]
pub struct CompanyMetricsResponse {
    pub score: f64,
    pub risk_level: RiskLevel,
    pub average_quiz_score: f64,
    pub phishing_click_rate: f64,
    pub active_users: i32,
    pub completed_exercises: i32,
    pub updated_at: DateTime<Utc>,
}

impl From<company_metrics::Model> for CompanyMetricsResponse {
    fn from(m: company_metrics::Model) -> Self {
        Self {
            score: m.score,
            risk_level: m.risk_level,
            average_quiz_score: m.average_quiz_score,
            phishing_click_rate: m.phishing_click_rate,
            active_users: m.active_users,
            completed_exercises: m.completed_exercises,
            updated_at: m.updated_at,
        }
    }
}
