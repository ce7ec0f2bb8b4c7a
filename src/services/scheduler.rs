//! Periodic task scheduler
//!
//! A simple scheduler for running background tasks at regular intervals.
//! Add new tasks by implementing the `PeriodicTask` trait.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;

use crate::services::mailer::MailerService;
use crate::services::sync::SyncAgentService;
use crate::services::{metrics, phishing};

/// Trait for periodic background tasks
#[async_trait]
pub trait PeriodicTask: Send + Sync {
    /// Task name for logging
    fn name(&self) -> &'static str;

    /// How often to run
    fn interval(&self) -> Duration;

    /// Execute the task
    async fn run(&self, db: &DatabaseConnection) -> anyhow::Result<()>;
}

/// Start all periodic tasks
pub fn start_scheduler(
    db: Arc<DatabaseConnection>,
    mailer: Arc<MailerService>,
    sync: Arc<SyncAgentService>,
) {
    let tasks: Vec<Box<dyn PeriodicTask>> = vec![
        Box::new(MetricsRecalcTask),
        Box::new(PhishingCampaignTask { mailer }),
        Box::new(SyncTask { service: sync }),
    ];

    for task in tasks {
        let db = db.clone();
        tokio::spawn(async move {
            run_task(task, db).await;
        });
    }

    tracing::info!("Periodic task scheduler started");
}

/// Run a single task on its interval
async fn run_task(task: Box<dyn PeriodicTask>, db: Arc<DatabaseConnection>) {
    let mut ticker = interval(task.interval());

    // Skip the first immediate tick
    ticker.tick().await;

    loop {
        ticker.tick().await;

        tracing::debug!(task = task.name(), "Running periodic task");

        match task.run(&db).await {
            Ok(()) => {
                tracing::debug!(task = task.name(), "Periodic task completed");
            }
            Err(e) => {
                tracing::error!(task = task.name(), error = %e, "Periodic task failed");
            }
        }
    }
}

/// Hourly refresh of the company metrics snapshot
struct MetricsRecalcTask;

#[async_trait]
impl PeriodicTask for MetricsRecalcTask {
    fn name(&self) -> &'static str {
        "metrics_recalc"
    }

    fn interval(&self) -> Duration {
        Duration::from_secs(60 * 60)
    }

    async fn run(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        let snapshot = metrics::recalculate(db).await?;
        tracing::debug!(score = snapshot.score, "Company metrics recalculated");
        Ok(())
    }
}

/// Daily phishing simulation campaign
struct PhishingCampaignTask {
    mailer: Arc<MailerService>,
}

#[async_trait]
impl PeriodicTask for PhishingCampaignTask {
    fn name(&self) -> &'static str {
        "phishing_campaign"
    }

    fn interval(&self) -> Duration {
        Duration::from_secs(24 * 60 * 60)
    }

    async fn run(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        phishing::launch_campaign(db, &self.mailer).await?;
        Ok(())
    }
}

/// Nightly content sync against the central server
struct SyncTask {
    service: Arc<SyncAgentService>,
}

#[async_trait]
impl PeriodicTask for SyncTask {
    fn name(&self) -> &'static str {
        "content_sync"
    }

    fn interval(&self) -> Duration {
        Duration::from_secs(24 * 60 * 60)
    }

    async fn run(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        self.service.run_sync(db).await?;
        Ok(())
    }
}
