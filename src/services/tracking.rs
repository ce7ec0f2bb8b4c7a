//! Phishing interaction tracking.
//!
//! Every tracker mutation recounts the campaign totals from the tracker
//! rows, so counters stay consistent even after replays or partial sends.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, Set,
};

use crate::application::error::{AppError, Result};
use crate::models::prelude::*;
use crate::models::{exercise, phishing_tracker, user_exercise_result};

async fn find_by_token(db: &DatabaseConnection, token: &str) -> Result<phishing_tracker::Model> {
    PhishingTracker::find()
        .filter(phishing_tracker::Column::Token.eq(token))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Unknown tracking token".to_string()))
}

/// Mark the tracked email as opened. Idempotent: only the first open
/// sets the timestamp.
pub async fn track_open(db: &DatabaseConnection, token: &str) -> Result<phishing_tracker::Model> {
    let tracker = find_by_token(db, token).await?;
    let campaign_id = tracker.campaign_id;

    let tracker = if tracker.opened {
        tracker
    } else {
        let mut active = tracker.into_active_model();
        active.opened = Set(true);
        active.opened_at = Set(Some(Utc::now()));
        active.update(db).await?
    };

    refresh_campaign_stats(db, campaign_id).await?;
    Ok(tracker)
}

/// Mark the phishing link as clicked. A click implies the mail was
/// opened, and counts as a failed phishing exercise for the user.
pub async fn track_click(db: &DatabaseConnection, token: &str) -> Result<phishing_tracker::Model> {
    let tracker = find_by_token(db, token).await?;
    let campaign_id = tracker.campaign_id;
    let user_id = tracker.user_id;
    let already_clicked = tracker.clicked;
    let was_opened = tracker.opened;

    let tracker = if already_clicked && was_opened {
        tracker
    } else {
        let now = Utc::now();
        let mut active = tracker.into_active_model();
        if !already_clicked {
            active.clicked = Set(true);
            active.clicked_at = Set(Some(now));
        }
        if !was_opened {
            active.opened = Set(true);
            active.opened_at = Set(Some(now));
        }
        active.update(db).await?
    };

    if !already_clicked {
        record_phishing_result(db, user_id, 0.0, false).await?;
    }

    refresh_campaign_stats(db, campaign_id).await?;
    Ok(tracker)
}

/// Mark the mail as reported by the recipient. Reporting counts as a
/// passed phishing exercise.
pub async fn track_report(db: &DatabaseConnection, token: &str) -> Result<phishing_tracker::Model> {
    let tracker = find_by_token(db, token).await?;
    let campaign_id = tracker.campaign_id;
    let user_id = tracker.user_id;
    let already_reported = tracker.reported;

    let tracker = if already_reported {
        tracker
    } else {
        let mut active = tracker.into_active_model();
        active.reported = Set(true);
        active.reported_at = Set(Some(Utc::now()));
        active.update(db).await?
    };

    if !already_reported {
        record_phishing_result(db, user_id, 100.0, true).await?;
    }

    refresh_campaign_stats(db, campaign_id).await?;
    Ok(tracker)
}

/// Record a pass/fail result against the phishing exercise. Skipped with
/// a log line when no phishing exercise exists yet.
async fn record_phishing_result(
    db: &DatabaseConnection,
    user_id: i64,
    score: f64,
    success: bool,
) -> Result<()> {
    let phishing_exercise = Exercise::find()
        .filter(exercise::Column::Topic.eq("phishing"))
        .filter(exercise::Column::Active.eq(true))
        .one(db)
        .await?;

    let Some(ex) = phishing_exercise else {
        tracing::debug!(user_id, "No phishing exercise configured, skipping result");
        return Ok(());
    };

    let result = user_exercise_result::ActiveModel {
        user_id: Set(user_id),
        exercise_id: Set(ex.id),
        score: Set(score),
        success: Set(success),
        duration_secs: Set(None),
        details_json: Set(None),
        completed_at: Set(Utc::now()),
        ..Default::default()
    };
    result.insert(db).await?;
    Ok(())
}

/// Recount a campaign's totals from its tracker rows.
pub async fn refresh_campaign_stats(db: &DatabaseConnection, campaign_id: i64) -> Result<()> {
    let campaign = PhishingCampaign::find_by_id(campaign_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Campaign {} not found", campaign_id)))?;

    let base = PhishingTracker::find().filter(phishing_tracker::Column::CampaignId.eq(campaign_id));

    let total_sent = base.clone().count(db).await? as i32;
    let total_clicked = base
        .clone()
        .filter(phishing_tracker::Column::Clicked.eq(true))
        .count(db)
        .await? as i32;
    let total_opened = base
        .clone()
        .filter(phishing_tracker::Column::Opened.eq(true))
        .count(db)
        .await? as i32;
    let total_reported = base
        .filter(phishing_tracker::Column::Reported.eq(true))
        .count(db)
        .await? as i32;

    let mut active = campaign.into_active_model();
    active.total_sent = Set(total_sent);
    active.total_clicked = Set(total_clicked);
    active.total_opened = Set(total_opened);
    active.total_reported = Set(total_reported);
    active.update(db).await?;

    Ok(())
}
