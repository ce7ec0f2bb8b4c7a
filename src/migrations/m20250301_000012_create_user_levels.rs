//! Migration: Create user_levels table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserLevels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserLevels::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserLevels::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(UserLevels::CurrentLevel)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(UserLevels::TotalXp)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserLevels::XpToNextLevel)
                            .integer()
                            .not_null()
                            .default(100),
                    )
                    .col(
                        ColumnDef::new(UserLevels::ModulesCompleted)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserLevels::TotalBadges)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserLevels::StreakDays)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(UserLevels::LastActivityDate).date().null())
                    .col(
                        ColumnDef::new(UserLevels::Rank)
                            .string()
                            .not_null()
                            .default("BEGINNER"),
                    )
                    .col(
                        ColumnDef::new(UserLevels::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserLevels::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
#[iden = "user_levels"]
enum UserLevels {
    Table,
    Id,
    #[iden = "user_id"]
    UserId,
    #[iden = "current_level"]
    CurrentLevel,
    #[iden = "total_xp"]
    TotalXp,
    #[iden = "xp_to_next_level"]
    XpToNextLevel,
    #[iden = "modules_completed"]
    ModulesCompleted,
    #[iden = "total_badges"]
    TotalBadges,
    #[iden = "streak_days"]
    StreakDays,
    #[iden = "last_activity_date"]
    LastActivityDate,
    Rank,
    #[iden = "updated_at"]
    UpdatedAt,
}
