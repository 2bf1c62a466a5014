//! HTTP handlers and routing

pub mod admins;
pub mod auth;
pub mod books;
pub mod health;
pub mod import;
pub mod loans;
pub mod openapi;
pub mod pages;
pub mod session;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

pub use session::{CatalogAccess, CurrentSession, HostSession};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes());

    // Browser-facing pages and form endpoints
    let pages = Router::new()
        .route("/", get(pages::index))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/admin", get(pages::admin_console))
        .route("/host", get(pages::host_console))
        .route("/change-password", post(auth::change_password))
        .route("/change-username", post(auth::change_username))
        .route("/upload", post(import::upload).layer(upload_limit.clone()));

    // JSON API
    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authentication
        .route("/auth/login", post(auth::api_login))
        .route("/auth/me", get(auth::me))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/import", post(import::import_books).layer(upload_limit))
        .route("/books/:id", put(books::update_book).delete(books::delete_book))
        // Loans
        .route("/loans", get(loans::list_loans).post(loans::create_loan))
        .route("/loans/:id", put(loans::update_loan).delete(loans::return_loan))
        // Admin accounts
        .route("/admins", get(admins::list_admins).post(admins::create_admin))
        .route("/admins/:username", put(admins::update_admin).delete(admins::delete_admin));

    Router::new()
        .merge(pages)
        .nest("/api", api)
        .with_state(state)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
