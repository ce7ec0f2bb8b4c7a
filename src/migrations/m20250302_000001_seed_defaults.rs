use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // Seed default badges
        seed_badges(db).await?;

        // Seed default training modules
        seed_training_modules(db).await?;

        // Seed runtime configuration rows
        seed_configs(db).await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // Seeding is not reversible - data may have been modified
        Ok(())
    }
}

async fn seed_badges(db: &SchemaManagerConnection<'_>) -> Result<(), DbErr> {
    use crate::models::badge;
    use crate::models::prelude::*;

    let badge_count = Badge::find().count(db).await?;
    if badge_count > 0 {
        return Ok(());
    }

    let now = chrono::Utc::now();

    // (name, display_name, description, badge_type, req_type, req_value, rarity, points, order)
    let default_badges = [
        (
            "first_steps",
            "First Steps",
            "Complete your first exercise",
            "ACHIEVEMENT",
            Some("EXERCISES_COMPLETED"),
            Some("1"),
            "COMMON",
            10,
            1,
        ),
        (
            "phishing_module",
            "Phishing Spotter",
            "Complete the phishing awareness module",
            "MODULE",
            Some("MODULE_COMPLETE"),
            Some("phishing_awareness"),
            "RARE",
            50,
            2,
        ),
        (
            "passwords_module",
            "Password Guardian",
            "Complete the password security module",
            "MODULE",
            Some("MODULE_COMPLETE"),
            Some("password_security"),
            "RARE",
            50,
            3,
        ),
        (
            "social_module",
            "Social Shield",
            "Complete the social engineering module",
            "MODULE",
            Some("MODULE_COMPLETE"),
            Some("social_engineering"),
            "RARE",
            50,
            4,
        ),
        (
            "data_module",
            "Data Defender",
            "Complete the data protection module",
            "MODULE",
            Some("MODULE_COMPLETE"),
            Some("data_protection"),
            "RARE",
            50,
            5,
        ),
        (
            "week_streak",
            "On a Roll",
            "Stay active seven days in a row",
            "STREAK",
            Some("STREAK_DAYS"),
            Some("7"),
            "EPIC",
            75,
            6,
        ),
        (
            "level_five",
            "Rising Star",
            "Reach level 5",
            "LEVEL",
            Some("LEVEL_REACHED"),
            Some("5"),
            "EPIC",
            100,
            7,
        ),
    ];

    for (name, display_name, description, badge_type, req_type, req_value, rarity, points, order) in
        default_badges
    {
        let new_badge = badge::ActiveModel {
            name: Set(name.to_string()),
            display_name: Set(display_name.to_string()),
            description: Set(description.to_string()),
            icon_url: Set(None),
            badge_type: Set(badge_type.to_string()),
            requirement_type: Set(req_type.map(str::to_string)),
            requirement_value: Set(req_value.map(str::to_string)),
            rarity: Set(rarity.to_string()),
            points: Set(points),
            order_index: Set(order),
            active: Set(true),
            created_at: Set(now),
            ..Default::default()
        };
        new_badge.insert(db).await?;
    }

    Ok(())
}

async fn seed_training_modules(db: &SchemaManagerConnection<'_>) -> Result<(), DbErr> {
    use crate::models::prelude::*;
    use crate::models::training_module;

    let module_count = TrainingModule::find().count(db).await?;
    if module_count > 0 {
        return Ok(());
    }

    let now = chrono::Utc::now();

    let default_modules = [
        (
            "phishing_awareness",
            "Phishing Awareness",
            "Recognize and report fraudulent emails",
            "BEGINNER",
            5,
            1,
        ),
        (
            "password_security",
            "Password Security",
            "Build and manage strong credentials",
            "BEGINNER",
            5,
            2,
        ),
        (
            "social_engineering",
            "Social Engineering",
            "Spot manipulation tactics beyond email",
            "INTERMEDIATE",
            5,
            3,
        ),
        (
            "data_protection",
            "Data Protection",
            "Handle sensitive company data safely",
            "ADVANCED",
            5,
            4,
        ),
    ];

    for (name, display_name, description, difficulty, total, order) in default_modules {
        let new_module = training_module::ActiveModel {
            name: Set(name.to_string()),
            display_name: Set(display_name.to_string()),
            description: Set(Some(description.to_string())),
            difficulty: Set(difficulty.to_string()),
            total_exercises: Set(total),
            badge_id: Set(None),
            order_index: Set(order),
            icon_url: Set(None),
            active: Set(true),
            created_at: Set(now),
            ..Default::default()
        };
        new_module.insert(db).await?;
    }

    Ok(())
}

async fn seed_configs(db: &SchemaManagerConnection<'_>) -> Result<(), DbErr> {
    use crate::models::config_entry;
    use crate::models::prelude::*;

    let config_count = ConfigEntry::find().count(db).await?;
    if config_count > 0 {
        return Ok(());
    }

    let now = chrono::Utc::now();

    let default_configs = [
        (
            "phishing.enabled",
            "true",
            "Master switch for phishing simulation campaigns",
        ),
        (
            "company.name",
            "CyberSensei",
            "Company name substituted into phishing templates",
        ),
    ];

    for (key, value, description) in default_configs {
        let entry = config_entry::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            description: Set(Some(description.to_string())),
            updated_at: Set(now),
            ..Default::default()
        };
        entry.insert(db).await?;
    }

    Ok(())
}
