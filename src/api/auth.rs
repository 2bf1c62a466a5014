//! Login, logout and self-service account endpoints

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult, MessageResponse},
    i18n::Message,
    models::user::{ChangePasswordRequest, ChangeUsernameRequest, LoginRequest, SessionInfo},
    AppState,
};

use super::{
    pages,
    session::{removal_cookie, session_cookie, CurrentSession, HostSession},
};

/// Login response for API clients
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Session token, also set as a cookie
    pub token: String,
    pub token_type: String,
    pub user: SessionInfo,
}

/// Login form
pub async fn login_form() -> Html<String> {
    pages::login_page(None)
}

/// Form login: sets the session cookie and redirects to the role's console
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginRequest>,
) -> AppResult<Response> {
    let user = match state.services.auth.authenticate(&form.username, &form.password).await {
        Ok(user) => user,
        Err(AppError::Authentication(message)) => return Ok(pages::login_page(Some(message)).into_response()),
        Err(e) => return Err(e),
    };

    let claims = state.services.auth.claims_for(&user);
    let token = state.services.auth.issue_token(&claims)?;
    let jar = jar.add(session_cookie(&state.config.auth, token));

    Ok((jar, Redirect::to(user.role.landing_path())).into_response())
}

/// Clear the session and go back to the landing page
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    (jar.remove(removal_cookie(&state.config.auth)), Redirect::to("/"))
}

/// Log in and obtain a session token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn api_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    let user = state
        .services
        .auth
        .authenticate(&request.username, &request.password)
        .await?;

    let claims = state.services.auth.claims_for(&user);
    let token = state.services.auth.issue_token(&claims)?;
    let jar = jar.add(session_cookie(&state.config.auth, token.clone()));

    Ok((
        jar,
        Json(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            user: SessionInfo::from(&claims),
        }),
    ))
}

/// Identity of the current session
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("session" = [])),
    responses(
        (status = 200, description = "Current session", body = SessionInfo),
        (status = 403, description = "No session", body = crate::error::ErrorResponse)
    )
)]
pub async fn me(CurrentSession(claims): CurrentSession) -> Json<SessionInfo> {
    Json(SessionInfo::from(&claims))
}

/// Change the caller's own password
#[utoipa::path(
    post,
    path = "/change-password",
    tag = "auth",
    security(("session" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Current password is wrong", body = crate::error::ErrorResponse),
        (status = 403, description = "No session", body = crate::error::ErrorResponse)
    )
)]
pub async fn change_password(
    State(state): State<AppState>,
    CurrentSession(claims): CurrentSession,
    Json(request): Json<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.services.auth.change_password(&claims, request).await?;
    Ok(Json(Message::PasswordChanged.into()))
}

/// Rename the calling host account (host only)
#[utoipa::path(
    post,
    path = "/change-username",
    tag = "auth",
    security(("session" = [])),
    request_body = ChangeUsernameRequest,
    responses(
        (status = 200, description = "Username changed", body = MessageResponse),
        (status = 400, description = "Missing or taken username", body = crate::error::ErrorResponse),
        (status = 403, description = "Host session required", body = crate::error::ErrorResponse)
    )
)]
pub async fn change_username(
    State(state): State<AppState>,
    jar: CookieJar,
    HostSession(claims): HostSession,
    Json(request): Json<ChangeUsernameRequest>,
) -> AppResult<(CookieJar, Json<MessageResponse>)> {
    let renewed = state.services.auth.change_username(&claims, request).await?;
    let token = state.services.auth.issue_token(&renewed)?;
    let jar = jar.add(session_cookie(&state.config.auth, token));

    Ok((jar, Json(Message::UsernameChanged.into())))
}
