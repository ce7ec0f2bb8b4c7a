pub mod auth;
pub mod config_store;
pub mod mailer;
pub mod metrics;
pub mod phishing;
pub mod progression;
pub mod scheduler;
pub mod sync;
pub mod tracking;
