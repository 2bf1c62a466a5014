//! API integration tests, driving the router in-process against an in-memory database

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use libris_server::{api::create_router, repository::Repository, AppConfig, AppState};

const BOUNDARY: &str = "libris-test-boundary";

async fn app_with(mut config: AppConfig) -> Router {
    config.database.url = "sqlite::memory:".to_string();
    config.database.max_connections = 1;
    config.database.min_connections = 1;
    config.uploads.dir = std::env::temp_dir().join(format!("libris-uploads-{}", uuid::Uuid::new_v4()));

    let repository = Repository::connect(&config.database)
        .await
        .expect("Failed to open in-memory database");
    let bootstrap = config.bootstrap.clone();
    let state = AppState::new(config, repository);
    state
        .services
        .auth
        .ensure_host(&bootstrap)
        .await
        .expect("Failed to create host account");

    create_router(state)
}

async fn app() -> Router {
    app_with(AppConfig::default()).await
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.expect("Failed to send request")
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Failed to parse response")
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("No Location header")
}

/// `name=value` part of the session cookie set by a response
fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("libris_session="))
        .map(|v| v.split(';').next().unwrap_or_default().to_string())
}

fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn delete(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn login_request(username: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("username={}&password={}", username, password)))
        .unwrap()
}

fn upload_request(uri: &str, cookie: Option<&str>, file_name: &str, content: &[u8]) -> Request<Body> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"));
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = send(app, login_request(username, password)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    session_cookie(&response).expect("No session cookie")
}

async fn host_cookie(app: &Router) -> String {
    login(app, "admin", "admin").await
}

/// Create an admin account through the API and log it in
async fn admin_cookie(app: &Router, username: &str) -> String {
    let host = host_cookie(app).await;
    let response = send(
        app,
        json_request(
            "POST",
            "/api/admins",
            Some(&host),
            json!({ "username": username, "password": "pw", "fullname": "Librarian" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    login(app, username, "pw").await
}

#[tokio::test]
async fn test_health_check() {
    let app = app().await;

    let response = send(&app, get("/api/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");

    let response = send(&app, get("/api/ready", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_host_login_redirects_to_host_console() {
    let app = app().await;

    let response = send(&app, login_request("admin", "admin")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/host");
    let cookie = session_cookie(&response).expect("No session cookie");

    let response = send(&app, get("/host", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Role checks are strict: a host is bounced from the admin console
    let response = send(&app, get("/admin", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_admin_login_redirects_to_admin_console() {
    let app = app().await;
    let host = host_cookie(&app).await;
    send(
        &app,
        json_request(
            "POST",
            "/api/admins",
            Some(&host),
            json!({ "username": "reza", "password": "pw", "fullname": "Reza" }),
        ),
    )
    .await;

    let response = send(&app, login_request("reza", "pw")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
    let cookie = session_cookie(&response).expect("No session cookie");

    let response = send(&app, get("/admin", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Reza"));

    let response = send(&app, get("/host", Some(&cookie))).await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_wrong_credentials_never_set_a_session() {
    let app = app().await;

    let response = send(&app, login_request("admin", "wrong")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).is_none());
    assert!(body_text(response).await.contains("class=\"error\""));

    let response = send(&app, login_request("nobody", "admin")).await;
    assert!(session_cookie(&response).is_none());
}

#[tokio::test]
async fn test_consoles_require_login() {
    let app = app().await;

    let response = send(&app, get("/admin", None)).await;
    assert_eq!(location(&response), "/login");
    let response = send(&app, get("/host", Some("libris_session=forged"))).await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = app().await;
    let cookie = host_cookie(&app).await;

    let response = send(&app, get("/logout", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    let cleared = session_cookie(&response).expect("Cookie not cleared");
    assert_eq!(cleared, "libris_session=");
}

#[tokio::test]
async fn test_api_login_and_me() {
    let app = app().await;

    let response = send(
        &app,
        json_request("POST", "/api/auth/login", None, json!({ "username": "admin", "password": "admin" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["user"]["role"], "host");
    let token = body["token"].as_str().expect("No token").to_string();

    let request = Request::builder()
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["username"], "admin");

    let response = send(
        &app,
        json_request("POST", "/api/auth/login", None, json!({ "username": "admin", "password": "x" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_book_crud() {
    let app = app().await;
    let cookie = host_cookie(&app).await;

    for title in ["Shahnameh", "Divan"] {
        let response = send(&app, json_request("POST", "/api/books", Some(&cookie), json!({ "title": title }))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["message"].is_string());
    }

    let response = send(&app, get("/api/books", Some(&cookie))).await;
    let books = body_json(response).await;
    assert_eq!(books.as_array().map(Vec::len), Some(2));
    assert_eq!(books[0]["title"], "Shahnameh");
    let id = books[0]["id"].as_i64().expect("No book id");

    let response = send(
        &app,
        json_request("PUT", &format!("/api/books/{}", id), Some(&cookie), json!({ "title": "Shahnameh (Moscow)" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, delete(&format!("/api/books/{}", id), Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let books = body_json(send(&app, get("/api/books", Some(&cookie))).await).await;
    assert_eq!(books.as_array().map(Vec::len), Some(1));
    assert_eq!(books[0]["title"], "Divan");
}

#[tokio::test]
async fn test_missing_book_ids_are_noops() {
    let app = app().await;
    let cookie = host_cookie(&app).await;

    let response = send(&app, json_request("PUT", "/api/books/999", Some(&cookie), json!({ "title": "x" }))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = send(&app, delete("/api/books/999", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_book_title_is_required() {
    let app = app().await;
    let cookie = host_cookie(&app).await;

    let response = send(&app, json_request("POST", "/api/books", Some(&cookie), json!({ "title": "" }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], 18);
    assert!(body["error"].is_string());

    let response = send(&app, json_request("PUT", "/api/books/1", Some(&cookie), json!({}))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_catalog_is_public_by_default() {
    let app = app().await;

    let response = send(&app, json_request("POST", "/api/books", None, json!({ "title": "Golestan" }))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let books = body_json(send(&app, get("/api/books", None)).await).await;
    assert_eq!(books[0]["title"], "Golestan");

    let response = send(&app, get("/api/loans", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_guarded_catalog_requires_session() {
    let mut config = AppConfig::default();
    config.security.public_catalog = false;
    let app = app_with(config).await;

    let response = send(&app, get("/api/books", None)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let response = send(&app, json_request("POST", "/api/books", None, json!({ "title": "Golestan" }))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let response = send(&app, get("/api/loans", None)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let cookie = host_cookie(&app).await;
    let response = send(&app, get("/api/books", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_returned_loan_leaves_active_list_but_is_kept() {
    let app = app().await;
    let cookie = admin_cookie(&app, "reza").await;

    for borrower in ["Ali", "Neda"] {
        let response = send(
            &app,
            json_request(
                "POST",
                "/api/loans",
                Some(&cookie),
                json!({ "borrower": borrower, "book_title": "Divan", "return_date": "1403-05-01" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let loans = body_json(send(&app, get("/api/loans", Some(&cookie))).await).await;
    let id = loans[0]["id"].as_i64().expect("No loan id");
    assert_eq!(loans[0]["returned"], false);

    let response = send(&app, delete(&format!("/api/loans/{}", id), Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let active = body_json(send(&app, get("/api/loans", Some(&cookie))).await).await;
    assert_eq!(active.as_array().map(Vec::len), Some(1));
    assert_eq!(active[0]["borrower"], "Neda");

    let all = body_json(send(&app, get("/api/loans?include_returned=true", Some(&cookie))).await).await;
    assert_eq!(all.as_array().map(Vec::len), Some(2));
    assert_eq!(all[0]["returned"], true);
}

#[tokio::test]
async fn test_loan_fields_required_on_create_only() {
    let app = app().await;
    let cookie = host_cookie(&app).await;

    let response = send(
        &app,
        json_request("POST", "/api/loans", Some(&cookie), json!({ "borrower": "Ali", "book_title": "Divan" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    send(
        &app,
        json_request(
            "POST",
            "/api/loans",
            Some(&cookie),
            json!({ "borrower": "Ali", "book_title": "Divan", "return_date": "1403-05-01" }),
        ),
    )
    .await;
    let loans = body_json(send(&app, get("/api/loans", Some(&cookie))).await).await;
    let id = loans[0]["id"].as_i64().expect("No loan id");

    let response = send(
        &app,
        json_request("PUT", &format!("/api/loans/{}", id), Some(&cookie), json!({ "borrower": "Sina" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let loans = body_json(send(&app, get("/api/loans", Some(&cookie))).await).await;
    assert_eq!(loans[0]["borrower"], "Sina");
    assert_eq!(loans[0]["book_title"], Value::Null);
}

#[tokio::test]
async fn test_host_only_endpoints_reject_admins_and_anonymous() {
    let app = app().await;
    let admin = admin_cookie(&app, "reza").await;

    let requests = |cookie: Option<&str>| {
        vec![
            get("/api/admins", cookie),
            json_request("POST", "/api/admins", cookie, json!({ "username": "x", "password": "y", "fullname": "z" })),
            json_request("PUT", "/api/admins/reza", cookie, json!({ "fullname": "x", "password": "y", "new_username": "z" })),
            delete("/api/admins/reza", cookie),
            json_request("POST", "/change-username", cookie, json!({ "new_username": "boss" })),
        ]
    };

    for request in requests(Some(&admin)).into_iter().chain(requests(None)) {
        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

#[tokio::test]
async fn test_admin_management() {
    let app = app().await;
    let host = host_cookie(&app).await;

    let create = |username: &str| {
        json_request(
            "POST",
            "/api/admins",
            Some(&host),
            json!({ "username": username, "password": "pw", "fullname": "Librarian" }),
        )
    };

    assert_eq!(send(&app, create("reza")).await.status(), StatusCode::OK);

    // Duplicate of an admin and of the host account
    for taken in ["reza", "admin"] {
        let response = send(&app, create(taken)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], 8);
    }

    let admins = body_json(send(&app, get("/api/admins", Some(&host))).await).await;
    assert_eq!(admins.as_array().map(Vec::len), Some(1));
    assert_eq!(admins[0]["username"], "reza");
    assert!(admins[0].get("password").is_none());

    let response = send(
        &app,
        json_request(
            "PUT",
            "/api/admins/reza",
            Some(&host),
            json!({ "fullname": "Reza R", "password": "pw2", "new_username": "rezar" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    login(&app, "rezar", "pw2").await;

    let response = send(&app, delete("/api/admins/rezar", Some(&host))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let admins = body_json(send(&app, get("/api/admins", Some(&host))).await).await;
    assert_eq!(admins.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_primary_admin_cannot_be_deleted() {
    let app = app().await;
    let host = host_cookie(&app).await;

    let response = send(&app, delete("/api/admins/admin", Some(&host))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_admin_requires_all_fields() {
    let app = app().await;
    let host = host_cookie(&app).await;

    let response = send(
        &app,
        json_request("PUT", "/api/admins/reza", Some(&host), json!({ "fullname": "Reza" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_change_password() {
    let app = app().await;
    let cookie = admin_cookie(&app, "reza").await;

    let response = send(
        &app,
        json_request("POST", "/change-password", Some(&cookie), json!({ "old": "wrong", "new": "fresh" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    login(&app, "reza", "pw").await;

    let response = send(
        &app,
        json_request("POST", "/change-password", Some(&cookie), json!({ "old": "pw", "new": "fresh" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    login(&app, "reza", "fresh").await;

    let response = send(
        &app,
        json_request("POST", "/change-password", None, json!({ "old": "fresh", "new": "x" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_change_username_renews_session() {
    let app = app().await;
    let cookie = host_cookie(&app).await;

    let response = send(
        &app,
        json_request("POST", "/change-username", Some(&cookie), json!({ "new_username": "" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        json_request("POST", "/change-username", Some(&cookie), json!({ "new_username": "chief" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let renewed = session_cookie(&response).expect("Session not renewed");

    let me = body_json(send(&app, get("/api/auth/me", Some(&renewed))).await).await;
    assert_eq!(me["username"], "chief");
    login(&app, "chief", "admin").await;
}

#[tokio::test]
async fn test_upload_requires_session() {
    let app = app().await;

    let response = send(&app, upload_request("/upload", None, "books.xlsx", b"data")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    let response = send(&app, upload_request("/api/books/import", None, "books.xlsx", b"data")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_upload_without_file_name_is_rejected() {
    let app = app().await;
    let cookie = host_cookie(&app).await;

    let response = send(&app, upload_request("/upload", Some(&cookie), "", b"data")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let response = send(&app, upload_request("/api/books/import", Some(&cookie), "", b"data")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unreadable_spreadsheet_is_a_server_fault() {
    let app = app().await;
    let cookie = host_cookie(&app).await;

    let response = send(
        &app,
        upload_request("/api/books/import", Some(&cookie), "books.xlsx", b"not a workbook"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], 22);

    let books = body_json(send(&app, get("/api/books", Some(&cookie))).await).await;
    assert_eq!(books.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_update_of_unknown_admin_rejects_taken_username() {
    let app = app().await;
    let host = host_cookie(&app).await;
    admin_cookie(&app, "reza").await;

    let response = send(
        &app,
        json_request(
            "PUT",
            "/api/admins/ghost",
            Some(&host),
            json!({ "fullname": "Ghost", "password": "pw", "new_username": "reza" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], 8);
}

#[tokio::test]
async fn test_change_username_to_existing_name_fails() {
    let app = app().await;
    let host = host_cookie(&app).await;
    admin_cookie(&app, "reza").await;

    for taken in ["admin", "reza"] {
        let response = send(
            &app,
            json_request("POST", "/change-username", Some(&host), json!({ "new_username": taken })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(session_cookie(&response).is_none());
    }

    let me = body_json(send(&app, get("/api/auth/me", Some(&host))).await).await;
    assert_eq!(me["username"], "admin");
}

#[tokio::test]
async fn test_stale_host_session_cannot_take_over_a_username() {
    let app = app().await;
    let stale = host_cookie(&app).await;
    admin_cookie(&app, "reza").await;

    let response = send(
        &app,
        json_request("POST", "/change-username", Some(&stale), json!({ "new_username": "chief" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    for target in ["reza", "boss"] {
        let response = send(
            &app,
            json_request("POST", "/change-username", Some(&stale), json!({ "new_username": target })),
        )
        .await;
        assert_ne!(response.status(), StatusCode::OK);
        assert!(session_cookie(&response).is_none());
    }

    login(&app, "chief", "admin").await;
    login(&app, "reza", "pw").await;
}

/// Workbook with a header and four data rows, two of them titled
fn books_workbook() -> Vec<u8> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "title").unwrap();
    sheet.write_string(1, 0, "Shahnameh").unwrap();
    sheet.write_string(2, 1, "no title here").unwrap();
    sheet.write_string(3, 0, "Divan").unwrap();
    sheet.write_string(4, 1, "no title here either").unwrap();
    workbook.save_to_buffer().unwrap()
}

#[tokio::test]
async fn test_import_reports_titles_from_workbook() {
    let app = app().await;
    let cookie = host_cookie(&app).await;

    let response = send(
        &app,
        upload_request("/api/books/import", Some(&cookie), "My Books.xlsx", &books_workbook()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let report = body_json(response).await;
    assert_eq!(report["file_name"], "My_Books.xlsx");
    assert_eq!(report["inserted"], 2);
    assert_eq!(report["skipped"], 2);
    assert_eq!(report["failed"], 0);

    let books = body_json(send(&app, get("/api/books", Some(&cookie))).await).await;
    let titles: Vec<_> = books
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Shahnameh", "Divan"]);
}

#[tokio::test]
async fn test_browser_upload_imports_and_returns_to_console() {
    let app = app().await;
    let cookie = admin_cookie(&app, "reza").await;

    let response = send(&app, upload_request("/upload", Some(&cookie), "books.xlsx", &books_workbook())).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");

    let books = body_json(send(&app, get("/api/books", Some(&cookie))).await).await;
    assert_eq!(books.as_array().map(Vec::len), Some(2));
}
