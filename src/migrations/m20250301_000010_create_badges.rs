//! Migration: Create badges table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Badges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Badges::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Badges::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Badges::DisplayName).string().not_null())
                    .col(ColumnDef::new(Badges::Description).text().not_null())
                    .col(ColumnDef::new(Badges::IconUrl).string().null())
                    .col(ColumnDef::new(Badges::BadgeType).string().not_null())
                    .col(ColumnDef::new(Badges::RequirementType).string().null())
                    .col(ColumnDef::new(Badges::RequirementValue).string().null())
                    .col(
                        ColumnDef::new(Badges::Rarity)
                            .string()
                            .not_null()
                            .default("COMMON"),
                    )
                    .col(ColumnDef::new(Badges::Points).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Badges::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Badges::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Badges::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Badges::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
#[iden = "badges"]
enum Badges {
    Table,
    Id,
    Name,
    #[iden = "display_name"]
    DisplayName,
    Description,
    #[iden = "icon_url"]
    IconUrl,
    #[iden = "badge_type"]
    BadgeType,
    #[iden = "requirement_type"]
    RequirementType,
    #[iden = "requirement_value"]
    RequirementValue,
    Rarity,
    Points,
    #[iden = "order_index"]
    OrderIndex,
    Active,
    #[iden = "created_at"]
    CreatedAt,
}
