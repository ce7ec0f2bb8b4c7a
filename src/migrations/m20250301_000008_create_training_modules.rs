//! Migration: Create training_modules table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingModules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrainingModules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TrainingModules::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(TrainingModules::DisplayName).string().not_null())
                    .col(ColumnDef::new(TrainingModules::Description).text().null())
                    .col(ColumnDef::new(TrainingModules::Difficulty).string().not_null())
                    .col(
                        ColumnDef::new(TrainingModules::TotalExercises)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(TrainingModules::BadgeId).big_integer().null())
                    .col(
                        ColumnDef::new(TrainingModules::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(TrainingModules::IconUrl).string().null())
                    .col(
                        ColumnDef::new(TrainingModules::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(TrainingModules::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(TrainingModules::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
#[iden = "training_modules"]
enum TrainingModules {
    Table,
    Id,
    Name,
    #[iden = "display_name"]
    DisplayName,
    Description,
    Difficulty,
    #[iden = "total_exercises"]
    TotalExercises,
    #[iden = "badge_id"]
    BadgeId,
    #[iden = "order_index"]
    OrderIndex,
    #[iden = "icon_url"]
    IconUrl,
    Active,
    #[iden = "created_at"]
    CreatedAt,
}
