//! Migration: Create user_module_progress table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserModuleProgress::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserModuleProgress::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserModuleProgress::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserModuleProgress::ModuleId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserModuleProgress::ExercisesCompleted)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserModuleProgress::ExercisesSuccess)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserModuleProgress::TotalExercises)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserModuleProgress::CompletionPercentage)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(UserModuleProgress::AverageScore)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(UserModuleProgress::Status).string().not_null())
                    .col(
                        ColumnDef::new(UserModuleProgress::StartedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UserModuleProgress::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UserModuleProgress::LastActivityAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_module_progress_user_module")
                    .table(UserModuleProgress::Table)
                    .col(UserModuleProgress::UserId)
                    .col(UserModuleProgress::ModuleId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(UserModuleProgress::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
#[iden = "user_module_progress"]
enum UserModuleProgress {
    Table,
    Id,
    #[iden = "user_id"]
    UserId,
    #[iden = "module_id"]
    ModuleId,
    #[iden = "exercises_completed"]
    ExercisesCompleted,
    #[iden = "exercises_success"]
    ExercisesSuccess,
    #[iden = "total_exercises"]
    TotalExercises,
    #[iden = "completion_percentage"]
    CompletionPercentage,
    #[iden = "average_score"]
    AverageScore,
    Status,
    #[iden = "started_at"]
    StartedAt,
    #[iden = "completed_at"]
    CompletedAt,
    #[iden = "last_activity_at"]
    LastActivityAt,
}
