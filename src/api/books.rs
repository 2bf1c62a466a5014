//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppResult, MessageResponse},
    i18n::Message,
    models::book::{Book, BookTitle},
    AppState,
};

use super::session::CatalogAccess;

/// List every book in storage order
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>),
        (status = 403, description = "No session while the catalog is guarded", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    _access: CatalogAccess,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Add a book
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = BookTitle,
    responses(
        (status = 200, description = "Book added", body = MessageResponse),
        (status = 400, description = "Missing title", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    access: CatalogAccess,
    Json(book): Json<BookTitle>,
) -> AppResult<Json<MessageResponse>> {
    let id = state.services.catalog.create_book(book).await?;
    tracing::info!("{} added book {}", access.caller(), id);
    Ok(Json(Message::BookAdded.into()))
}

/// Rename a book (unknown ids are ignored)
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = BookTitle,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Missing title", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    access: CatalogAccess,
    Path(id): Path<i64>,
    Json(book): Json<BookTitle>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.update_book(id, book).await?;
    tracing::info!("{} updated book {}", access.caller(), id);
    Ok(Json(Message::BookUpdated.into()))
}

/// Delete a book (unknown ids are ignored)
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    access: CatalogAccess,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.delete_book(id).await?;
    tracing::info!("{} deleted book {}", access.caller(), id);
    Ok(Json(Message::BookDeleted.into()))
}
