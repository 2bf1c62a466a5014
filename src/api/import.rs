//! Spreadsheet upload endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::Multipart;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    i18n::Message,
    models::import_report::ImportReport,
    AppState,
};

use super::session::CurrentSession;

/// Multipart body of an import request
#[derive(ToSchema)]
pub struct ImportUpload {
    /// Spreadsheet (.xlsx, .xls, .ods); row 1 is a header, column A holds titles
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// The `file` part of a multipart body, if one with a filename was sent
async fn read_file_field(mut multipart: Multipart) -> Option<(String, Vec<u8>)> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Rejected malformed upload: {}", e);
                return None;
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return None;
        }

        return match field.bytes().await {
            Ok(bytes) => Some((file_name, bytes.to_vec())),
            Err(e) => {
                tracing::warn!("Failed to read upload {}: {}", file_name, e);
                None
            }
        };
    }
}

fn no_file() -> Response {
    (StatusCode::BAD_REQUEST, Message::NoFileSent.text()).into_response()
}

/// Browser upload: imports the sheet, then back to the admin console
pub async fn upload(
    State(state): State<AppState>,
    session: Option<CurrentSession>,
    multipart: Multipart,
) -> AppResult<Response> {
    let Some(CurrentSession(claims)) = session else {
        return Ok(Redirect::to("/login").into_response());
    };

    let Some((file_name, bytes)) = read_file_field(multipart).await else {
        return Ok(no_file());
    };

    let report = state.services.import.import_books(&file_name, bytes).await?;
    tracing::debug!("Upload by {}: {:?}", claims.username(), report);

    Ok(Redirect::to("/admin").into_response())
}

/// Import books from a spreadsheet and report the outcome
#[utoipa::path(
    post,
    path = "/api/books/import",
    tag = "books",
    security(("session" = [])),
    request_body(content = ImportUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Import finished", body = ImportReport),
        (status = 400, description = "No file sent"),
        (status = 403, description = "No session", body = crate::error::ErrorResponse),
        (status = 500, description = "Unreadable spreadsheet", body = crate::error::ErrorResponse)
    )
)]
pub async fn import_books(
    State(state): State<AppState>,
    CurrentSession(claims): CurrentSession,
    multipart: Multipart,
) -> AppResult<Response> {
    let Some((file_name, bytes)) = read_file_field(multipart).await else {
        return Ok(no_file());
    };

    tracing::info!("{} is importing {}", claims.username(), file_name);
    let report = state.services.import.import_books(&file_name, bytes).await?;

    Ok(Json(report).into_response())
}
