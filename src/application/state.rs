use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::services::mailer::MailerService;

/// Database connection type alias
pub type DbConn = DatabaseConnection;

/// Application state containing all shared resources
#[derive(Clone)]
pub struct AppState {
    pub db: DbConn,
    pub mailer: Arc<MailerService>,
}

impl AppState {
    pub fn new(db: DbConn, mailer: Arc<MailerService>) -> Self {
        Self { db, mailer }
    }
}
