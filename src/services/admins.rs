//! Admin account management (host only)

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    i18n::Message,
    models::user::{AdminSummary, CreateAdmin, Role, SessionClaims, UpdateAdmin},
    repository::Repository,
    services::auth::hash_password,
};

/// Username of the primary admin account, which cannot be deleted
pub const PRIMARY_ADMIN_USERNAME: &str = "admin";

#[derive(Clone)]
pub struct AdminsService {
    repository: Repository,
}

impl AdminsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, claims: &SessionClaims) -> AppResult<Vec<AdminSummary>> {
        claims.require_host()?;
        self.repository.users_list_admins().await
    }

    pub async fn create(&self, claims: &SessionClaims, admin: CreateAdmin) -> AppResult<()> {
        claims.require_host()?;
        admin
            .validate()
            .map_err(|_| AppError::Validation(Message::AllFieldsRequired))?;

        let (Some(username), Some(password), Some(fullname)) = (admin.username, admin.password, admin.fullname) else {
            return Err(AppError::Validation(Message::AllFieldsRequired));
        };

        self.repository
            .users_create(&username, &hash_password(&password)?, &fullname, Role::Admin)
            .await?;

        tracing::info!("Host {} created admin {}", claims.username(), username);
        Ok(())
    }

    /// Overwrite name, password and username of an admin account.
    /// A missing account is a no-op.
    pub async fn update(&self, claims: &SessionClaims, username: &str, admin: UpdateAdmin) -> AppResult<()> {
        claims.require_host()?;
        admin
            .validate()
            .map_err(|_| AppError::Validation(Message::AllFieldsRequired))?;

        let (Some(fullname), Some(password), Some(new_username)) = (admin.fullname, admin.password, admin.new_username) else {
            return Err(AppError::Validation(Message::AllFieldsRequired));
        };

        // Checked whether or not the target account exists
        if new_username != username && self.repository.users_exists(&new_username).await? {
            return Err(AppError::Conflict(Message::NewUsernameTaken));
        }

        let updated = self
            .repository
            .users_update_admin(username, &fullname, &hash_password(&password)?, &new_username)
            .await?;

        if updated > 0 {
            tracing::info!("Host {} updated admin {} (now {})", claims.username(), username, new_username);
        }
        Ok(())
    }

    pub async fn delete(&self, claims: &SessionClaims, username: &str) -> AppResult<()> {
        claims.require_host()?;
        if username == PRIMARY_ADMIN_USERNAME {
            return Err(AppError::Validation(Message::PrimaryAdminProtected));
        }

        let deleted = self.repository.users_delete_admin(username).await?;
        if deleted > 0 {
            tracing::info!("Host {} deleted admin {}", claims.username(), username);
        }
        Ok(())
    }
}
