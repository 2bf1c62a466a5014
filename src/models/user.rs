//! User accounts, roles and session claims

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::AppError, i18n::Message};

/// Account role. Checks are strict equality: a host is not an admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Host,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Host => "host",
        }
    }

    /// Console page the role lands on after login
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Host => "/host",
            Role::Admin => "/admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full user row
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Argon2 PHC string
    pub password_hash: String,
    pub fullname: String,
    pub role: Role,
}

/// Admin account as listed to hosts (never carries the password)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AdminSummary {
    pub username: String,
    pub fullname: String,
}

/// Login form fields
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordRequest {
    /// Current password
    pub old: Option<String>,
    /// New password
    #[validate(required, length(min = 1))]
    pub new: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangeUsernameRequest {
    #[validate(required, length(min = 1))]
    pub new_username: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAdmin {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
    #[validate(required, length(min = 1))]
    pub fullname: Option<String>,
}

/// Update of an admin account; every field is required
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAdmin {
    #[validate(required, length(min = 1))]
    pub fullname: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
    #[validate(required, length(min = 1))]
    pub new_username: Option<String>,
}

/// Session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Username
    pub sub: String,
    pub fullname: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

impl SessionClaims {
    pub fn for_user(user: &User, issued_at: i64, lifetime_hours: u64) -> Self {
        Self {
            sub: user.username.clone(),
            fullname: user.fullname.clone(),
            role: user.role,
            exp: issued_at + (lifetime_hours as i64 * 3600),
            iat: issued_at,
        }
    }

    /// Create a signed token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Verify and decode a token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn username(&self) -> &str {
        &self.sub
    }

    pub fn is_host(&self) -> bool {
        self.role == Role::Host
    }

    /// Require the host role
    pub fn require_host(&self) -> Result<(), AppError> {
        if self.is_host() {
            Ok(())
        } else {
            Err(AppError::Authorization(Message::AccessDenied))
        }
    }
}

/// Public view of the session identity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionInfo {
    pub username: String,
    pub fullname: String,
    pub role: Role,
}

impl From<&SessionClaims> for SessionInfo {
    fn from(claims: &SessionClaims) -> Self {
        Self {
            username: claims.sub.clone(),
            fullname: claims.fullname.clone(),
            role: claims.role,
        }
    }
}
