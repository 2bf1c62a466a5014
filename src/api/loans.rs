//! Loan management endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::{AppResult, MessageResponse},
    i18n::Message,
    models::loan::{CreateLoan, Loan, LoanQuery, UpdateLoan},
    AppState,
};

use super::session::CatalogAccess;

/// List active loans (or all loans with `include_returned=true`)
#[utoipa::path(
    get,
    path = "/api/loans",
    tag = "loans",
    params(LoanQuery),
    responses(
        (status = 200, description = "Loans in storage order", body = Vec<Loan>),
        (status = 403, description = "No session while the catalog is guarded", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_loans(
    State(state): State<AppState>,
    _access: CatalogAccess,
    Query(query): Query<LoanQuery>,
) -> AppResult<Json<Vec<Loan>>> {
    let loans = state
        .services
        .loans
        .list(query.include_returned.unwrap_or(false))
        .await?;
    Ok(Json(loans))
}

/// Register a loan
#[utoipa::path(
    post,
    path = "/api/loans",
    tag = "loans",
    request_body = CreateLoan,
    responses(
        (status = 200, description = "Loan registered", body = MessageResponse),
        (status = 400, description = "Missing field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_loan(
    State(state): State<AppState>,
    access: CatalogAccess,
    Json(loan): Json<CreateLoan>,
) -> AppResult<Json<MessageResponse>> {
    let id = state.services.loans.create(loan).await?;
    tracing::info!("{} registered loan {}", access.caller(), id);
    Ok(Json(Message::LoanRegistered.into()))
}

/// Mark a loan as returned; the record is kept
#[utoipa::path(
    delete,
    path = "/api/loans/{id}",
    tag = "loans",
    params(
        ("id" = i64, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Return registered", body = MessageResponse)
    )
)]
pub async fn return_loan(
    State(state): State<AppState>,
    access: CatalogAccess,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.services.loans.mark_returned(id).await?;
    tracing::info!("{} marked loan {} returned", access.caller(), id);
    Ok(Json(Message::LoanReturned.into()))
}

/// Overwrite borrower, book title and return date
#[utoipa::path(
    put,
    path = "/api/loans/{id}",
    tag = "loans",
    params(
        ("id" = i64, Path, description = "Loan ID")
    ),
    request_body = UpdateLoan,
    responses(
        (status = 200, description = "Loan updated", body = MessageResponse)
    )
)]
pub async fn update_loan(
    State(state): State<AppState>,
    access: CatalogAccess,
    Path(id): Path<i64>,
    Json(loan): Json<UpdateLoan>,
) -> AppResult<Json<MessageResponse>> {
    state.services.loans.update(id, loan).await?;
    tracing::info!("{} updated loan {}", access.caller(), id);
    Ok(Json(Message::LoanUpdated.into()))
}
