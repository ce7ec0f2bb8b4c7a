//! Migration: Create phishing_campaigns table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PhishingCampaigns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PhishingCampaigns::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PhishingCampaigns::TemplateId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PhishingCampaigns::SentAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PhishingCampaigns::TotalSent)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PhishingCampaigns::TotalClicked)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PhishingCampaigns::TotalOpened)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PhishingCampaigns::TotalReported)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_campaigns_sent_at")
                    .table(PhishingCampaigns::Table)
                    .col(PhishingCampaigns::SentAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(PhishingCampaigns::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
#[iden = "phishing_campaigns"]
enum PhishingCampaigns {
    Table,
    Id,
    #[iden = "template_id"]
    TemplateId,
    #[iden = "sent_at"]
    SentAt,
    #[iden = "total_sent"]
    TotalSent,
    #[iden = "total_clicked"]
    TotalClicked,
    #[iden = "total_opened"]
    TotalOpened,
    #[iden = "total_reported"]
    TotalReported,
}
