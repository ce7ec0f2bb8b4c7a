//! Migration: Create phishing_templates table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PhishingTemplates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PhishingTemplates::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PhishingTemplates::Label).string().not_null())
                    .col(ColumnDef::new(PhishingTemplates::Subject).string().not_null())
                    .col(ColumnDef::new(PhishingTemplates::HtmlContent).text().not_null())
                    .col(ColumnDef::new(PhishingTemplates::TextContent).text().not_null())
                    .col(ColumnDef::new(PhishingTemplates::Type).string().not_null())
                    .col(
                        ColumnDef::new(PhishingTemplates::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PhishingTemplates::CreatedAt)
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
                    .table(PhishingTemplates::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
#[iden = "phishing_templates"]
enum PhishingTemplates {
    Table,
    Id,
    Label,
    Subject,
    #[iden = "html_content"]
    HtmlContent,
    #[iden = "text_content"]
    TextContent,
    Type,
    Active,
    #[iden = "created_at"]
    CreatedAt,
}
