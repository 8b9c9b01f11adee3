//! Application layer: configuration and the prediction service.

mod config;
mod service;

pub use config::{Config, DatabaseConfig, LoggingConfig, RegistryConfig, DATABASE_URL_ENV};
pub use service::PredictionService;
