//! Admin account management endpoints (host only)

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppResult, MessageResponse},
    i18n::Message,
    models::user::{AdminSummary, CreateAdmin, UpdateAdmin},
    AppState,
};

use super::session::HostSession;

/// List admin accounts
#[utoipa::path(
    get,
    path = "/api/admins",
    tag = "admins",
    security(("session" = [])),
    responses(
        (status = 200, description = "Admin accounts", body = Vec<AdminSummary>),
        (status = 403, description = "Host session required", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_admins(
    State(state): State<AppState>,
    HostSession(claims): HostSession,
) -> AppResult<Json<Vec<AdminSummary>>> {
    let admins = state.services.admins.list(&claims).await?;
    Ok(Json(admins))
}

/// Create an admin account
#[utoipa::path(
    post,
    path = "/api/admins",
    tag = "admins",
    security(("session" = [])),
    request_body = CreateAdmin,
    responses(
        (status = 200, description = "Admin created", body = MessageResponse),
        (status = 400, description = "Missing field or username taken", body = crate::error::ErrorResponse),
        (status = 403, description = "Host session required", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_admin(
    State(state): State<AppState>,
    HostSession(claims): HostSession,
    Json(admin): Json<CreateAdmin>,
) -> AppResult<Json<MessageResponse>> {
    state.services.admins.create(&claims, admin).await?;
    Ok(Json(Message::AdminCreated.into()))
}

/// Update an admin account
#[utoipa::path(
    put,
    path = "/api/admins/{username}",
    tag = "admins",
    security(("session" = [])),
    params(
        ("username" = String, Path, description = "Current username of the admin")
    ),
    request_body = UpdateAdmin,
    responses(
        (status = 200, description = "Admin updated", body = MessageResponse),
        (status = 400, description = "Missing field or username taken", body = crate::error::ErrorResponse),
        (status = 403, description = "Host session required", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_admin(
    State(state): State<AppState>,
    HostSession(claims): HostSession,
    Path(username): Path<String>,
    Json(admin): Json<UpdateAdmin>,
) -> AppResult<Json<MessageResponse>> {
    state.services.admins.update(&claims, &username, admin).await?;
    Ok(Json(Message::AdminUpdated.into()))
}

/// Delete an admin account
#[utoipa::path(
    delete,
    path = "/api/admins/{username}",
    tag = "admins",
    security(("session" = [])),
    params(
        ("username" = String, Path, description = "Username of the admin")
    ),
    responses(
        (status = 200, description = "Admin deleted", body = MessageResponse),
        (status = 400, description = "Primary admin is protected", body = crate::error::ErrorResponse),
        (status = 403, description = "Host session required", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_admin(
    State(state): State<AppState>,
    HostSession(claims): HostSession,
    Path(username): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.admins.delete(&claims, &username).await?;
    Ok(Json(Message::AdminDeleted.into()))
}
