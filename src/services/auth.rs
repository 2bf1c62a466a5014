//! Authentication, sessions and self-service account changes

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use rand::rngs::OsRng;
use validator::Validate;

use crate::{
    config::{AuthConfig, BootstrapConfig},
    error::{AppError, AppResult},
    i18n::Message,
    models::user::{ChangePasswordRequest, ChangeUsernameRequest, Role, SessionClaims, User},
    repository::Repository,
};

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored Argon2 hash
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Check credentials and return the matching user
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .repository
            .users_get_by_username(username)
            .await?
            .ok_or(AppError::Authentication(Message::LoginFailed))?;

        if !verify_password(&user.password_hash, password)? {
            tracing::warn!("Rejected login for {}", username);
            return Err(AppError::Authentication(Message::LoginFailed));
        }

        tracing::info!("User {} logged in as {}", user.username, user.role);
        Ok(user)
    }

    /// Fresh session claims for a user
    pub fn claims_for(&self, user: &User) -> SessionClaims {
        SessionClaims::for_user(user, Utc::now().timestamp(), self.config.session_hours)
    }

    /// Sign session claims into a token
    pub fn issue_token(&self, claims: &SessionClaims) -> AppResult<String> {
        claims
            .create_token(&self.config.session_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Decode and verify a session token
    pub fn verify_token(&self, token: &str) -> AppResult<SessionClaims> {
        SessionClaims::from_token(token, &self.config.session_secret)
            .map_err(|_| AppError::Authorization(Message::AccessDenied))
    }

    /// Change the caller's own password after checking the current one
    pub async fn change_password(&self, claims: &SessionClaims, request: ChangePasswordRequest) -> AppResult<()> {
        let user = self
            .repository
            .users_get_by_username(claims.username())
            .await?
            .ok_or(AppError::Validation(Message::WrongCurrentPassword))?;

        let old = request.old.as_deref().unwrap_or_default();
        if !verify_password(&user.password_hash, old)? {
            return Err(AppError::Validation(Message::WrongCurrentPassword));
        }

        request
            .validate()
            .map_err(|_| AppError::Validation(Message::NewPasswordRequired))?;
        let new_password = request.new.as_deref().unwrap_or_default();

        self.repository
            .users_update_password(&user.username, &hash_password(new_password)?)
            .await?;

        tracing::info!("Password changed for {}", user.username);
        Ok(())
    }

    /// Rename the calling host account; returns the updated session claims
    pub async fn change_username(
        &self,
        claims: &SessionClaims,
        request: ChangeUsernameRequest,
    ) -> AppResult<SessionClaims> {
        claims.require_host()?;
        request
            .validate()
            .map_err(|_| AppError::Validation(Message::NewUsernameRequired))?;
        let new_username = request.new_username.unwrap_or_default();

        if self.repository.users_exists(&new_username).await? {
            return Err(AppError::Conflict(Message::UsernameTaken));
        }

        let renamed = self
            .repository
            .users_rename_host(claims.username(), &new_username)
            .await?;

        // The session names a host that no longer exists under that name
        if renamed == 0 {
            tracing::warn!("Rename rejected: no host account named {}", claims.username());
            return Err(AppError::Authorization(Message::AccessDenied));
        }

        tracing::info!("Host {} renamed to {}", claims.username(), new_username);

        let mut renewed = claims.clone();
        renewed.sub = new_username;
        Ok(renewed)
    }

    /// Create the configured host account when none exists.
    /// Returns whether an account was created.
    pub async fn ensure_host(&self, bootstrap: &BootstrapConfig) -> AppResult<bool> {
        if self.repository.users_count_by_role(Role::Host).await? > 0 {
            return Ok(false);
        }

        let hash = hash_password(&bootstrap.host_password)?;
        self.repository
            .users_create(&bootstrap.host_username, &hash, &bootstrap.host_fullname, Role::Host)
            .await?;

        tracing::warn!(
            "No host account found, created '{}' from bootstrap configuration; change its password",
            bootstrap.host_username
        );
        Ok(true)
    }
}
