//! Company-wide security posture metrics.

use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::application::error::Result;
use crate::models::company_metrics::{self, RiskLevel};
use crate::models::prelude::*;
use crate::models::{exercise, phishing_campaign, phishing_tracker, user, user_exercise_result};

/// Weighted security score, clamped to 0..=100. Quiz performance counts
/// for 60%, phishing resilience for 40%.
pub fn security_score(average_quiz_score: f64, phishing_click_rate: f64) -> f64 {
    (average_quiz_score * 0.6 + (100.0 - phishing_click_rate) * 0.4).clamp(0.0, 100.0)
}

pub fn risk_level(score: f64, phishing_click_rate: f64) -> RiskLevel {
    if score >= 80.0 && phishing_click_rate < 10.0 {
        RiskLevel::Low
    } else if score >= 60.0 && phishing_click_rate < 25.0 {
        RiskLevel::Medium
    } else if score >= 40.0 && phishing_click_rate < 50.0 {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

/// Recompute the snapshot from raw data and append it. Returns the new
/// snapshot row.
pub async fn recalculate(db: &DatabaseConnection) -> Result<company_metrics::Model> {
    let week_ago = Utc::now() - Duration::days(7);

    // Average quiz score over the trailing week
    let quiz_ids: Vec<i64> = Exercise::find()
        .filter(exercise::Column::ExerciseType.eq(exercise::ExerciseType::Quiz))
        .select_only()
        .column(exercise::Column::Id)
        .into_tuple()
        .all(db)
        .await?;

    let average_quiz_score = if quiz_ids.is_empty() {
        0.0
    } else {
        let recent: Vec<f64> = UserExerciseResult::find()
            .filter(user_exercise_result::Column::ExerciseId.is_in(quiz_ids))
            .filter(user_exercise_result::Column::CompletedAt.gte(week_ago))
            .select_only()
            .column(user_exercise_result::Column::Score)
            .into_tuple()
            .all(db)
            .await?;
        if recent.is_empty() {
            0.0
        } else {
            recent.iter().sum::<f64>() / recent.len() as f64
        }
    };

    // Click rate from the latest campaign's trackers
    let latest_campaign = PhishingCampaign::find()
        .order_by_desc(phishing_campaign::Column::SentAt)
        .one(db)
        .await?;
    let phishing_click_rate = match latest_campaign {
        Some(campaign) => {
            let trackers =
                PhishingTracker::find().filter(phishing_tracker::Column::CampaignId.eq(campaign.id));
            let total = trackers.clone().count(db).await?;
            if total == 0 {
                0.0
            } else {
                let clicked = trackers
                    .filter(phishing_tracker::Column::Clicked.eq(true))
                    .count(db)
                    .await?;
                clicked as f64 * 100.0 / total as f64
            }
        }
        None => 0.0,
    };

    let active_users = User::find()
        .filter(user::Column::Active.eq(true))
        .count(db)
        .await? as i32;

    let completed_exercises = UserExerciseResult::find()
        .filter(user_exercise_result::Column::CompletedAt.gte(week_ago))
        .count(db)
        .await? as i32;

    let score = security_score(average_quiz_score, phishing_click_rate);
    let snapshot = company_metrics::ActiveModel {
        score: Set(score),
        risk_level: Set(risk_level(score, phishing_click_rate)),
        average_quiz_score: Set(average_quiz_score),
        phishing_click_rate: Set(phishing_click_rate),
        active_users: Set(active_users),
        completed_exercises: Set(completed_exercises),
        updated_at: Set(Utc::now()),
        ..Default::default()
    };

    Ok(snapshot.insert(db).await?)
}

/// Latest snapshot, if any has been taken.
pub async fn latest(db: &DatabaseConnection) -> Result<Option<company_metrics::Model>> {
    Ok(CompanyMetrics::find()
        .order_by_desc(company_metrics::Column::UpdatedAt)
        .one(db)
        .await?)
}
