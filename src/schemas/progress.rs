use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::training_module;
use crate::models::user_module_progress::{self, ProgressStatus};
use crate::schemas::badge::BadgeResponse;

#[derive(Debug, Clone, Serialize)]
pub struct ModuleProgressResponse {
    pub module_id: i64,
    pub module_name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub difficulty: String,
    pub icon_url: Option<String>,
    pub order_index: i32,
    pub exercises_completed: i32,
    pub exercises_success: i32,
    pub total_exercises: i32,
    pub completion_percentage: f64,
    pub average_score: f64,
    pub status: ProgressStatus,
    /// Whether the user holds this module's completion badge.
    pub badge_earned: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub last_activity_at: Option<DateTime<Utc>>,
}

impl ModuleProgressResponse {
    /// Progress for a module the user has touched.
    pub fn from_progress(
        module: training_module::Model,
        progress: user_module_progress::Model,
        badge_earned: bool,
    ) -> Self {
        Self {
            module_id: module.id,
            module_name: module.name,
            display_name: module.display_name,
            description: module.description,
            difficulty: module.difficulty,
            icon_url: module.icon_url,
            order_index: module.order_index,
            exercises_completed: progress.exercises_completed,
            exercises_success: progress.exercises_success,
            total_exercises: module.total_exercises,
            completion_percentage: progress.completion_percentage,
            average_score: progress.average_score,
            status: progress.status,
            badge_earned,
            started_at: progress.started_at,
            completed_at: progress.completed_at,
            last_activity_at: progress.last_activity_at,
        }
    }

    /// Zeroed progress for a module the user has never started.
    pub fn not_started(module: training_module::Model) -> Self {
        Self {
            module_id: module.id,
            module_name: module.name,
            display_name: module.display_name,
            description: module.description,
            difficulty: module.difficulty,
            icon_url: module.icon_url,
            order_index: module.order_index,
            exercises_completed: 0,
            exercises_success: 0,
            total_exercises: module.total_exercises,
            completion_percentage: 0.0,
            average_score: 0.0,
            status: ProgressStatus::NotStarted,
            badge_earned: false,
            started_at: None,
            completed_at: None,
            last_activity_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub current_level: i32,
    pub total_xp: i32,
    pub xp_to_next_level: i32,
    pub rank: String,
    pub streak_days: i32,
    pub modules_completed: i32,
    pub total_badges: i32,
    /// Completion percentage averaged over every active module.
    pub overall_completion: f64,
    /// Average score over modules the user has started.
    pub average_score: f64,
    pub total_exercises_completed: i64,
    /// First incomplete module in curriculum order.
    pub suggested_next_module: Option<String>,
    pub badges: Vec<BadgeResponse>,
    pub modules: Vec<ModuleProgressResponse>,
}
