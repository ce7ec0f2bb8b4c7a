pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users;
mod m20250301_000002_create_exercises;
mod m20250301_000003_create_user_exercise_results;
mod m20250301_000004_create_company_metrics;
mod m20250301_000005_create_phishing_templates;
mod m20250301_000006_create_phishing_campaigns;
mod m20250301_000007_create_phishing_trackers;
mod m20250301_000008_create_training_modules;
mod m20250301_000009_create_user_module_progress;
mod m20250301_000010_create_badges;
mod m20250301_000011_create_user_badges;
mod m20250301_000012_create_user_levels;
mod m20250301_000013_create_configs;
mod m20250302_000001_seed_defaults;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users::Migration),
            Box::new(m20250301_000002_create_exercises::Migration),
            Box::new(m20250301_000003_create_user_exercise_results::Migration),
            Box::new(m20250301_000004_create_company_metrics::Migration),
            Box::new(m20250301_000005_create_phishing_templates::Migration),
            Box::new(m20250301_000006_create_phishing_campaigns::Migration),
            Box::new(m20250301_000007_create_phishing_trackers::Migration),
            Box::new(m20250301_000008_create_training_modules::Migration),
            Box::new(m20250301_000009_create_user_module_progress::Migration),
            Box::new(m20250301_000010_create_badges::Migration),
            Box::new(m20250301_000011_create_user_badges::Migration),
            Box::new(m20250301_000012_create_user_levels::Migration),
            Box::new(m20250301_000013_create_configs::Migration),
            Box::new(m20250302_000001_seed_defaults::Migration),
        ]
    }
}
