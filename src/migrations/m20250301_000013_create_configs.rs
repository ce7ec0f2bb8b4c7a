//! Migration: Create configs table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Configs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Configs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Configs::Key).string().not_null().unique_key())
                    .col(ColumnDef::new(Configs::Value).text().not_null())
                    .col(ColumnDef::new(Configs::Description).string().null())
                    .col(
                        ColumnDef::new(Configs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Configs::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
#[iden = "configs"]
enum Configs {
    Table,
    Id,
    Key,
    Value,
    Description,
    #[iden = "updated_at"]
    UpdatedAt,
}
