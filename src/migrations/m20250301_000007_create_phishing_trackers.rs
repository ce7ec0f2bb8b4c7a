//! Migration: Create phishing_trackers table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PhishingTrackers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PhishingTrackers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PhishingTrackers::Token)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(PhishingTrackers::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PhishingTrackers::CampaignId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PhishingTrackers::Clicked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PhishingTrackers::ClickedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PhishingTrackers::Opened)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PhishingTrackers::OpenedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PhishingTrackers::Reported)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PhishingTrackers::ReportedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PhishingTrackers::SentAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trackers_campaign")
                    .table(PhishingTrackers::Table)
                    .col(PhishingTrackers::CampaignId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trackers_user")
                    .table(PhishingTrackers::Table)
                    .col(PhishingTrackers::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(PhishingTrackers::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
#[iden = "phishing_trackers"]
enum PhishingTrackers {
    Table,
    Id,
    Token,
    #[iden = "user_id"]
    UserId,
    #[iden = "campaign_id"]
    CampaignId,
    Clicked,
    #[iden = "clicked_at"]
    ClickedAt,
    Opened,
    #[iden = "opened_at"]
    OpenedAt,
    Reported,
    #[iden = "reported_at"]
    ReportedAt,
    #[iden = "sent_at"]
    SentAt,
}
