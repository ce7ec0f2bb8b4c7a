pub mod badge;
pub mod campaign;
pub mod exercise;
pub mod metrics;
pub mod progress;
pub mod settings;
pub mod user;
