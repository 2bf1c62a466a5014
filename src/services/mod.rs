//! Business logic services

pub mod admins;
pub mod auth;
pub mod catalog;
pub mod import;
pub mod loans;

use crate::{config::AppConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub admins: admins::AdminsService,
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoansService,
    pub import: import::ImportService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), config.auth.clone()),
            admins: admins::AdminsService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone()),
            import: import::ImportService::new(repository.clone(), config.uploads.clone()),
            repository,
        }
    }
}
