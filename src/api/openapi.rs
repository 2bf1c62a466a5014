//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{admins, auth, books, health, import, loans};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "0.3.0",
        description = "Library administration REST API: books, loans and admin accounts"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::api_login,
        auth::me,
        auth::change_password,
        auth::change_username,
        // Books
        books::list_books,
        books::create_book,
        books::update_book,
        books::delete_book,
        import::import_books,
        // Loans
        loans::list_loans,
        loans::create_loan,
        loans::return_loan,
        loans::update_loan,
        // Admins
        admins::list_admins,
        admins::create_admin,
        admins::update_admin,
        admins::delete_admin,
    ),
    components(
        schemas(
            // Auth
            auth::LoginResponse,
            crate::models::user::LoginRequest,
            crate::models::user::SessionInfo,
            crate::models::user::Role,
            crate::models::user::ChangePasswordRequest,
            crate::models::user::ChangeUsernameRequest,
            // Books
            crate::models::book::Book,
            crate::models::book::BookTitle,
            import::ImportUpload,
            crate::models::import_report::ImportReport,
            crate::models::import_report::RowError,
            // Loans
            crate::models::loan::Loan,
            crate::models::loan::CreateLoan,
            crate::models::loan::UpdateLoan,
            // Admins
            crate::models::user::AdminSummary,
            crate::models::user::CreateAdmin,
            crate::models::user::UpdateAdmin,
            // Health
            health::HealthResponse,
            // Responses
            crate::error::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Sessions and own account"),
        (name = "books", description = "Book catalog and spreadsheet import"),
        (name = "loans", description = "Loan tracking"),
        (name = "admins", description = "Admin account management (host only)")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
