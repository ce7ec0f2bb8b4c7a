//! Migration: Create user_badges table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBadges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserBadges::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserBadges::UserId).big_integer().not_null())
                    .col(ColumnDef::new(UserBadges::BadgeId).big_integer().not_null())
                    .col(
                        ColumnDef::new(UserBadges::EarnedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // A badge is earned at most once per user
        manager
            .create_index(
                Index::create()
                    .name("idx_user_badges_user_badge")
                    .table(UserBadges::Table)
                    .col(UserBadges::UserId)
                    .col(UserBadges::BadgeId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserBadges::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
#[iden = "user_badges"]
enum UserBadges {
    Table,
    Id,
    #[iden = "user_id"]
    UserId,
    #[iden = "badge_id"]
    BadgeId,
    #[iden = "earned_at"]
    EarnedAt,
}
