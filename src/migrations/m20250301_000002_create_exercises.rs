//! Migration: Create exercises table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exercises::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exercises::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Exercises::CentralId)
                            .string()
                            .null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Exercises::Version).string().null())
                    .col(
                        ColumnDef::new(Exercises::SyncedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Exercises::Topic).string().not_null())
                    .col(ColumnDef::new(Exercises::Type).string().not_null())
                    .col(ColumnDef::new(Exercises::Difficulty).string().not_null())
                    .col(ColumnDef::new(Exercises::PayloadJson).json().not_null())
                    .col(
                        ColumnDef::new(Exercises::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Exercises::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Exercises::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_exercises_type")
                    .table(Exercises::Table)
                    .col(Exercises::Type)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_exercises_difficulty")
                    .table(Exercises::Table)
                    .col(Exercises::Difficulty)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Exercises::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
#[iden = "exercises"]
enum Exercises {
    Table,
    Id,
    #[iden = "central_id"]
    CentralId,
    Version,
    #[iden = "synced_at"]
    SyncedAt,
    Topic,
    Type,
    Difficulty,
    #[iden = "payload_json"]
    PayloadJson,
    Active,
    #[iden = "created_at"]
    CreatedAt,
    #[iden = "updated_at"]
    UpdatedAt,
}
