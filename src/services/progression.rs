//! Gamification: XP, levels, streaks, badges and module progress.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::application::error::{AppError, Result};
use crate::models::prelude::*;
use crate::models::user_module_progress::ProgressStatus;
use crate::models::{
    badge, exercise, training_module, user_badge, user_exercise_result, user_level,
    user_module_progress,
};
use crate::schemas::badge::BadgeResponse;
use crate::schemas::progress::{DashboardResponse, ModuleProgressResponse};

/// Passing threshold for a submitted exercise score.
pub const PASS_SCORE: f64 = 70.0;

/// XP granted for a submission: a base for showing up plus a score bonus.
pub fn xp_for_score(score: f64) -> i32 {
    10 + (score.clamp(0.0, 100.0) / 10.0).round() as i32
}

/// XP needed to go from `level` to `level + 1`.
fn xp_threshold(level: i32) -> i32 {
    level * 100
}

/// Derive level and remaining XP from a cumulative total.
pub fn level_for_xp(total_xp: i32) -> (i32, i32) {
    let mut level = 1;
    let mut remaining = total_xp;
    while remaining >= xp_threshold(level) {
        remaining -= xp_threshold(level);
        level += 1;
    }
    (level, xp_threshold(level) - remaining)
}

pub fn rank_for_level(level: i32) -> &'static str {
    match level {
        i32::MIN..=4 => "BEGINNER",
        5..=9 => "INTERMEDIATE",
        10..=19 => "ADVANCED",
        _ => "EXPERT",
    }
}

/// Streak bookkeeping: consecutive-day activity extends it, a same-day
/// repeat keeps it, anything else starts over at one.
pub fn next_streak(streak_days: i32, last_activity: Option<NaiveDate>, today: NaiveDate) -> i32 {
    match last_activity {
        Some(last) if last == today => streak_days.max(1),
        Some(last) if last.succ_opt() == Some(today) => streak_days + 1,
        _ => 1,
    }
}

/// Fetch the user's level row, creating the initial one on first touch.
pub async fn ensure_level(db: &DatabaseConnection, user_id: i64) -> Result<user_level::Model> {
    let existing = UserLevel::find()
        .filter(user_level::Column::UserId.eq(user_id))
        .one(db)
        .await?;

    if let Some(level) = existing {
        return Ok(level);
    }

    let fresh = user_level::ActiveModel {
        user_id: Set(user_id),
        current_level: Set(1),
        total_xp: Set(0),
        xp_to_next_level: Set(xp_threshold(1)),
        modules_completed: Set(0),
        total_badges: Set(0),
        streak_days: Set(0),
        last_activity_date: Set(None),
        rank: Set("BEGINNER".to_string()),
        updated_at: Set(Utc::now()),
        ..Default::default()
    };
    Ok(fresh.insert(db).await?)
}

/// Award a badge if the user does not already hold it. Badge points are
/// credited as XP. Returns false when it was already earned.
pub async fn award_badge(
    db: &DatabaseConnection,
    user_id: i64,
    badge: &badge::Model,
) -> Result<bool> {
    let already = UserBadge::find()
        .filter(user_badge::Column::UserId.eq(user_id))
        .filter(user_badge::Column::BadgeId.eq(badge.id))
        .count(db)
        .await?;
    if already > 0 {
        return Ok(false);
    }

    let earned = user_badge::ActiveModel {
        user_id: Set(user_id),
        badge_id: Set(badge.id),
        earned_at: Set(Utc::now()),
        ..Default::default()
    };
    earned.insert(db).await?;

    let level = ensure_level(db, user_id).await?;
    let total_xp = level.total_xp + badge.points;
    let (current_level, xp_to_next) = level_for_xp(total_xp);
    let total_badges = level.total_badges + 1;
    let mut active = level.into_active_model();
    active.total_xp = Set(total_xp);
    active.current_level = Set(current_level);
    active.xp_to_next_level = Set(xp_to_next);
    active.total_badges = Set(total_badges);
    active.rank = Set(rank_for_level(current_level).to_string());
    active.updated_at = Set(Utc::now());
    active.update(db).await?;

    tracing::info!(user_id, badge = %badge.name, "Badge awarded");
    Ok(true)
}

/// Record a submitted exercise result and ripple it through XP, streak,
/// module progress and badge awarding. Returns the stored result row.
pub async fn record_result(
    db: &DatabaseConnection,
    user_id: i64,
    ex: &exercise::Model,
    score: f64,
    success: Option<bool>,
    duration_secs: Option<i64>,
    details_json: Option<serde_json::Value>,
) -> Result<user_exercise_result::Model> {
    let now = Utc::now();
    let success = success.unwrap_or(score >= PASS_SCORE);

    let result = user_exercise_result::ActiveModel {
        user_id: Set(user_id),
        exercise_id: Set(ex.id),
        score: Set(score),
        success: Set(success),
        duration_secs: Set(duration_secs),
        details_json: Set(details_json),
        completed_at: Set(now),
        ..Default::default()
    };
    let result = result.insert(db).await?;

    apply_xp_and_streak(db, user_id, score).await?;
    update_module_progress(db, user_id, ex, score, success).await?;
    check_auto_badges(db, user_id).await?;

    Ok(result)
}

async fn apply_xp_and_streak(db: &DatabaseConnection, user_id: i64, score: f64) -> Result<()> {
    let level = ensure_level(db, user_id).await?;
    let today = Utc::now().date_naive();

    let total_xp = level.total_xp + xp_for_score(score);
    let (current_level, xp_to_next) = level_for_xp(total_xp);
    let streak = next_streak(level.streak_days, level.last_activity_date, today);

    let mut active = level.into_active_model();
    active.total_xp = Set(total_xp);
    active.current_level = Set(current_level);
    active.xp_to_next_level = Set(xp_to_next);
    active.streak_days = Set(streak);
    active.last_activity_date = Set(Some(today));
    active.rank = Set(rank_for_level(current_level).to_string());
    active.updated_at = Set(Utc::now());
    active.update(db).await?;
    Ok(())
}

/// Module progress is keyed by the exercise topic matching a training
/// module name. Exercises without a module (e.g. ad-hoc phishing tests)
/// only count toward XP.
async fn update_module_progress(
    db: &DatabaseConnection,
    user_id: i64,
    ex: &exercise::Model,
    score: f64,
    success: bool,
) -> Result<()> {
    let module = TrainingModule::find()
        .filter(training_module::Column::Name.eq(ex.topic.as_str()))
        .filter(training_module::Column::Active.eq(true))
        .one(db)
        .await?;
    let Some(module) = module else {
        return Ok(());
    };

    let now = Utc::now();
    let existing = UserModuleProgress::find()
        .filter(user_module_progress::Column::UserId.eq(user_id))
        .filter(user_module_progress::Column::ModuleId.eq(module.id))
        .one(db)
        .await?;

    let progress = match existing {
        Some(p) => p,
        None => {
            let fresh = user_module_progress::ActiveModel {
                user_id: Set(user_id),
                module_id: Set(module.id),
                exercises_completed: Set(0),
                exercises_success: Set(0),
                total_exercises: Set(module.total_exercises),
                completion_percentage: Set(0.0),
                average_score: Set(0.0),
                status: Set(ProgressStatus::InProgress),
                started_at: Set(Some(now)),
                completed_at: Set(None),
                last_activity_at: Set(Some(now)),
                ..Default::default()
            };
            fresh.insert(db).await?
        }
    };

    let was_completed = progress.status == ProgressStatus::Completed;
    let completed = progress.exercises_completed + 1;
    let successes = progress.exercises_success + i32::from(success);
    let average =
        (progress.average_score * f64::from(progress.exercises_completed) + score) / f64::from(completed);
    let total = progress.total_exercises.max(module.total_exercises);
    let percentage = if total > 0 {
        (f64::from(completed) * 100.0 / f64::from(total)).min(100.0)
    } else {
        100.0
    };
    let now_complete = total > 0 && completed >= total;

    let mut active = progress.into_active_model();
    active.exercises_completed = Set(completed);
    active.exercises_success = Set(successes);
    active.total_exercises = Set(total);
    active.completion_percentage = Set(percentage);
    active.average_score = Set(average);
    active.last_activity_at = Set(Some(now));
    if now_complete && !was_completed {
        active.status = Set(ProgressStatus::Completed);
        active.completed_at = Set(Some(now));
    } else if !now_complete && !was_completed {
        active.status = Set(ProgressStatus::InProgress);
    }
    active.update(db).await?;

    if now_complete && !was_completed {
        complete_module(db, user_id, &module).await?;
    }
    Ok(())
}

/// Bump the completed-modules counter and hand out the module badge.
async fn complete_module(
    db: &DatabaseConnection,
    user_id: i64,
    module: &training_module::Model,
) -> Result<()> {
    let level = ensure_level(db, user_id).await?;
    let modules_completed = level.modules_completed + 1;
    let mut active = level.into_active_model();
    active.modules_completed = Set(modules_completed);
    active.updated_at = Set(Utc::now());
    active.update(db).await?;

    let module_badge = Badge::find()
        .filter(badge::Column::RequirementType.eq("MODULE_COMPLETE"))
        .filter(badge::Column::RequirementValue.eq(module.name.as_str()))
        .filter(badge::Column::Active.eq(true))
        .one(db)
        .await?;
    if let Some(b) = module_badge {
        award_badge(db, user_id, &b).await?;
    }

    tracing::info!(user_id, module = %module.name, "Training module completed");
    Ok(())
}

/// Evaluate count/streak/level badge requirements after a result lands.
async fn check_auto_badges(db: &DatabaseConnection, user_id: i64) -> Result<()> {
    let level = ensure_level(db, user_id).await?;
    let completed = UserExerciseResult::find()
        .filter(user_exercise_result::Column::UserId.eq(user_id))
        .count(db)
        .await? as i64;

    let candidates = Badge::find()
        .filter(badge::Column::Active.eq(true))
        .filter(badge::Column::RequirementType.is_not_null())
        .all(db)
        .await?;

    for b in candidates {
        let (Some(req_type), Some(req_value)) = (&b.requirement_type, &b.requirement_value) else {
            continue;
        };
        let met = match req_type.as_str() {
            "EXERCISES_COMPLETED" => req_value
                .parse::<i64>()
                .map(|needed| completed >= needed)
                .unwrap_or(false),
            "STREAK_DAYS" => req_value
                .parse::<i32>()
                .map(|needed| level.streak_days >= needed)
                .unwrap_or(false),
            "LEVEL_REACHED" => req_value
                .parse::<i32>()
                .map(|needed| level.current_level >= needed)
                .unwrap_or(false),
            // MODULE_COMPLETE badges are granted on module completion
            _ => false,
        };
        if met {
            award_badge(db, user_id, &b).await?;
        }
    }
    Ok(())
}

/// Badges the user has earned, newest first.
pub async fn user_badges(db: &DatabaseConnection, user_id: i64) -> Result<Vec<BadgeResponse>> {
    let earned = UserBadge::find()
        .filter(user_badge::Column::UserId.eq(user_id))
        .order_by_desc(user_badge::Column::EarnedAt)
        .find_also_related(Badge)
        .all(db)
        .await?;

    Ok(earned
        .into_iter()
        .filter_map(|(ub, b)| b.map(|b| BadgeResponse::from_badge(b, Some(ub.earned_at))))
        .collect())
}

/// Every active badge, flagged with whether the user holds it.
pub async fn all_badges_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<BadgeResponse>> {
    let earned = UserBadge::find()
        .filter(user_badge::Column::UserId.eq(user_id))
        .all(db)
        .await?;

    let badges = Badge::find()
        .filter(badge::Column::Active.eq(true))
        .order_by_asc(badge::Column::OrderIndex)
        .all(db)
        .await?;

    Ok(badges
        .into_iter()
        .map(|b| {
            let earned_at = earned.iter().find(|ub| ub.badge_id == b.id).map(|ub| ub.earned_at);
            BadgeResponse::from_badge(b, earned_at)
        })
        .collect())
}

/// Per-module progress for every active module, untouched ones included.
/// Each entry carries whether the user holds the module's completion
/// badge.
pub async fn module_progress(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<ModuleProgressResponse>> {
    let modules = TrainingModule::find()
        .filter(training_module::Column::Active.eq(true))
        .order_by_asc(training_module::Column::OrderIndex)
        .all(db)
        .await?;

    let rows = UserModuleProgress::find()
        .filter(user_module_progress::Column::UserId.eq(user_id))
        .all(db)
        .await?;

    let module_badges = Badge::find()
        .filter(badge::Column::RequirementType.eq("MODULE_COMPLETE"))
        .all(db)
        .await?;
    let earned: Vec<i64> = UserBadge::find()
        .filter(user_badge::Column::UserId.eq(user_id))
        .all(db)
        .await?
        .into_iter()
        .map(|ub| ub.badge_id)
        .collect();

    Ok(modules
        .into_iter()
        .map(|m| {
            let badge_earned = module_badges.iter().any(|b| {
                b.requirement_value.as_deref() == Some(m.name.as_str()) && earned.contains(&b.id)
            });
            match rows.iter().find(|p| p.module_id == m.id) {
                Some(p) => ModuleProgressResponse::from_progress(m, p.clone(), badge_earned),
                None => ModuleProgressResponse::not_started(m),
            }
        })
        .collect())
}

pub async fn dashboard(db: &DatabaseConnection, user_id: i64) -> Result<DashboardResponse> {
    let account = User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    let level = ensure_level(db, user_id).await?;
    let modules = module_progress(db, user_id).await?;
    let badges = user_badges(db, user_id).await?;

    let total_exercises_completed = UserExerciseResult::find()
        .filter(user_exercise_result::Column::UserId.eq(user_id))
        .count(db)
        .await? as i64;

    let overall_completion = if modules.is_empty() {
        0.0
    } else {
        modules.iter().map(|m| m.completion_percentage).sum::<f64>() / modules.len() as f64
    };

    let started: Vec<&ModuleProgressResponse> = modules
        .iter()
        .filter(|m| m.status != ProgressStatus::NotStarted)
        .collect();
    let average_score = if started.is_empty() {
        0.0
    } else {
        started.iter().map(|m| m.average_score).sum::<f64>() / started.len() as f64
    };

    // Modules come back in curriculum order
    let suggested_next_module = modules
        .iter()
        .find(|m| m.status != ProgressStatus::Completed)
        .map(|m| m.module_name.clone());

    Ok(DashboardResponse {
        user_id,
        name: account.name,
        email: account.email,
        current_level: level.current_level,
        total_xp: level.total_xp,
        xp_to_next_level: level.xp_to_next_level,
        rank: level.rank,
        streak_days: level.streak_days,
        modules_completed: level.modules_completed,
        total_badges: level.total_badges,
        overall_completion,
        average_score,
        total_exercises_completed,
        suggested_next_module,
        badges,
        modules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xp_scales_with_score() {
        assert_eq!(xp_for_score(0.0), 10);
        assert_eq!(xp_for_score(100.0), 20);
        assert_eq!(xp_for_score(75.0), 18);
        assert_eq!(xp_for_score(250.0), 20); // clamped
    }

    #[test]
    fn levels_follow_cumulative_thresholds() {
        // Level 1 needs 100 XP, level 2 needs another 200
        assert_eq!(level_for_xp(0), (1, 100));
        assert_eq!(level_for_xp(99), (1, 1));
        assert_eq!(level_for_xp(100), (2, 200));
        assert_eq!(level_for_xp(299), (2, 1));
        assert_eq!(level_for_xp(300), (3, 300));
    }

    #[test]
    fn ranks_map_to_level_bands() {
        assert_eq!(rank_for_level(1), "BEGINNER");
        assert_eq!(rank_for_level(4), "BEGINNER");
        assert_eq!(rank_for_level(5), "INTERMEDIATE");
        assert_eq!(rank_for_level(10), "ADVANCED");
        assert_eq!(rank_for_level(20), "EXPERT");
    }

    #[test]
    fn streak_extends_holds_and_resets() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let last_week = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();

        assert_eq!(next_streak(3, Some(yesterday), today), 4);
        assert_eq!(next_streak(3, Some(today), today), 3);
        assert_eq!(next_streak(3, Some(last_week), today), 1);
        assert_eq!(next_streak(0, None, today), 1);
    }
}
