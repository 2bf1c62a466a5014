//! Libris Library Administration Server
//!
//! A small REST/HTML backend for a library front desk: session login for
//! admins and the host (super-admin), book catalog and loan tracking, bulk
//! book import from spreadsheets, and admin account management.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, repository: repository::Repository) -> Self {
        let services = services::Services::new(repository, &config);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
