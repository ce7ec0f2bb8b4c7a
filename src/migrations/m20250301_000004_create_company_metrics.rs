//! Migration: Create company_metrics table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyMetrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompanyMetrics::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CompanyMetrics::Score).double().not_null())
                    .col(ColumnDef::new(CompanyMetrics::RiskLevel).string().not_null())
                    .col(
                        ColumnDef::new(CompanyMetrics::AverageQuizScore)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(CompanyMetrics::PhishingClickRate)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(CompanyMetrics::ActiveUsers)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CompanyMetrics::CompletedExercises)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CompanyMetrics::UpdatedAt)
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
                    .table(CompanyMetrics::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
#[iden = "company_metrics"]
enum CompanyMetrics {
    Table,
    Id,
    Score,
    #[iden = "risk_level"]
    RiskLevel,
    #[iden = "average_quiz_score"]
    AverageQuizScore,
    #[iden = "phishing_click_rate"]
    PhishingClickRate,
    #[iden = "active_users"]
    ActiveUsers,
    #[iden = "completed_exercises"]
    CompletedExercises,
    #[iden = "updated_at"]
    UpdatedAt,
}
