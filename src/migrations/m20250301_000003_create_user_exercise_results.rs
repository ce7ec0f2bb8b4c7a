//! Migration: Create user_exercise_results table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserExerciseResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserExerciseResults::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserExerciseResults::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserExerciseResults::ExerciseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserExerciseResults::Score).double().not_null())
                    .col(
                        ColumnDef::new(UserExerciseResults::Success)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserExerciseResults::DurationSecs)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(UserExerciseResults::DetailsJson).json().null())
                    .col(
                        ColumnDef::new(UserExerciseResults::CompletedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_results_user")
                    .table(UserExerciseResults::Table)
                    .col(UserExerciseResults::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_results_completed_at")
                    .table(UserExerciseResults::Table)
                    .col(UserExerciseResults::CompletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(UserExerciseResults::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
#[iden = "user_exercise_results"]
enum UserExerciseResults {
    Table,
    Id,
    #[iden = "user_id"]
    UserId,
    #[iden = "exercise_id"]
    ExerciseId,
    Score,
    Success,
    #[iden = "duration_secs"]
    DurationSecs,
    #[iden = "details_json"]
    DetailsJson,
    #[iden = "completed_at"]
    CompletedAt,
}
