//! Request-scoped session extractors
//!
//! The session token is read from the `Authorization: Bearer` header when
//! present, otherwise from the session cookie.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    extract::cookie::{Cookie, CookieJar, SameSite},
    headers::{authorization::Bearer, Authorization, HeaderMapExt},
};

use crate::{
    config::AuthConfig,
    error::AppError,
    i18n::Message,
    models::user::SessionClaims,
    AppState,
};

/// Verified identity of the caller; rejects with 403 when absent or invalid
pub struct CurrentSession(pub SessionClaims);

/// A session with the host role; rejects with 403 otherwise
pub struct HostSession(pub SessionClaims);

/// Access to book and loan endpoints.
///
/// Holds the caller's session, or `None` when `security.public_catalog`
/// opens these endpoints to anonymous callers.
pub struct CatalogAccess(pub Option<SessionClaims>);

impl CatalogAccess {
    /// Username for logs, `anonymous` without a session
    pub fn caller(&self) -> &str {
        self.0.as_ref().map_or("anonymous", SessionClaims::username)
    }
}

fn session_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    if let Some(authorization) = parts.headers.typed_get::<Authorization<Bearer>>() {
        return Some(authorization.token().to_string());
    }

    CookieJar::from_headers(&parts.headers)
        .get(cookie_name)
        .map(|cookie| cookie.value().to_string())
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = session_token(parts, &state.config.auth.cookie_name)
            .ok_or(AppError::Authorization(Message::AccessDenied))?;

        let claims = state.services.auth.verify_token(&token)?;
        Ok(CurrentSession(claims))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for HostSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let CurrentSession(claims) = CurrentSession::from_request_parts(parts, state).await?;
        claims.require_host()?;
        Ok(HostSession(claims))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CatalogAccess {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match CurrentSession::from_request_parts(parts, state).await {
            Ok(CurrentSession(claims)) => Ok(CatalogAccess(Some(claims))),
            Err(_) if state.config.security.public_catalog => Ok(CatalogAccess(None)),
            Err(e) => Err(e),
        }
    }
}

/// HTTP-only cookie carrying a session token
pub fn session_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(config.secure_cookie)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie that clears the session cookie on the client
pub fn removal_cookie(config: &AuthConfig) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone()).path("/").build()
}
