pub mod badge;
pub mod company_metrics;
pub mod config_entry;
pub mod exercise;
pub mod phishing_campaign;
pub mod phishing_template;
pub mod phishing_tracker;
pub mod training_module;
pub mod user;
pub mod user_badge;
pub mod user_exercise_result;
pub mod user_level;
pub mod user_module_progress;

#[allow(unused_imports)]
pub mod prelude {
    pub use super::badge::{self, Entity as Badge};
    pub use super::company_metrics::{self, Entity as CompanyMetrics};
    pub use super::config_entry::{self, Entity as ConfigEntry};
    pub use super::exercise::{self, Entity as Exercise};
    pub use super::phishing_campaign::{self, Entity as PhishingCampaign};
    pub use super::phishing_template::{self, Entity as PhishingTemplate};
    pub use super::phishing_tracker::{self, Entity as PhishingTracker};
    pub use super::training_module::{self, Entity as TrainingModule};
    pub use super::user::{self, Entity as User};
    pub use super::user_badge::{self, Entity as UserBadge};
    pub use super::user_exercise_result::{self, Entity as UserExerciseResult};
    pub use super::user_level::{self, Entity as UserLevel};
    pub use super::user_module_progress::{self, Entity as UserModuleProgress};
}
