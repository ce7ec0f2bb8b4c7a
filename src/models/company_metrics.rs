use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Company-wide security posture snapshot. Rows are append-only; the
/// newest `updated_at` is the current assessment.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_metrics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Overall security score, 0-100.
    pub score: f64,
    pub risk_level: RiskLevel,
    pub average_quiz_score: f64,
    pub phishing_click_rate: f64,
    pub active_users: i32,
    pub completed_exercises: i32,
    pub updated_at: DateTimeUtc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    #[sea_orm(string_value = "LOW")]
    Low,
    #[sea_orm(string_value = "MEDIUM")]
    Medium,
    #[sea_orm(string_value = "HIGH")]
    High,
    #[sea_orm(string_value = "CRITICAL")]
    Critical,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
