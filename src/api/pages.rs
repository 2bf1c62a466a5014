//! Minimal HTML pages: landing, login form and the two consoles

use axum::response::{Html, IntoResponse, Redirect, Response};

use super::session::CurrentSession;
use crate::{i18n::Message, models::user::Role};

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="fa" dir="rtl">
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
{body}
</body>
</html>"#,
        title = escape(title),
        body = body
    ))
}

/// Public landing page
pub async fn index() -> Html<String> {
    layout("Libris", r#"<h1>Libris</h1><p><a href="/login">ورود</a></p>"#)
}

/// Login form, optionally showing an error
pub fn login_page(error: Option<Message>) -> Html<String> {
    let error = error
        .map(|message| format!(r#"<p class="error">{}</p>"#, escape(message.text())))
        .unwrap_or_default();

    layout(
        "ورود",
        &format!(
            r#"<h1>ورود</h1>
{error}
<form method="post" action="/login">
  <input name="username" autocomplete="username" required>
  <input name="password" type="password" autocomplete="current-password" required>
  <button type="submit">ورود</button>
</form>"#
        ),
    )
}

fn console(heading: &str, name: &str, extra: &str) -> Html<String> {
    layout(
        heading,
        &format!(
            r#"<h1>{heading}</h1>
<p>{name}</p>
<form method="post" action="/upload" enctype="multipart/form-data">
  <input type="file" name="file" accept=".xlsx,.xls,.ods">
  <button type="submit">بارگذاری</button>
</form>
{extra}
<p><a href="/logout">خروج</a></p>"#,
            heading = escape(heading),
            name = escape(name),
        ),
    )
}

fn landing(session: Option<CurrentSession>, role: Role) -> Result<String, Response> {
    match session {
        Some(CurrentSession(claims)) if claims.role == role => Ok(claims.fullname),
        _ => Err(Redirect::to("/login").into_response()),
    }
}

/// Admin console; exact `admin` role required
pub async fn admin_console(session: Option<CurrentSession>) -> Response {
    match landing(session, Role::Admin) {
        Ok(name) => {
            let name = if name.is_empty() { Message::DefaultAdminName.text().to_string() } else { name };
            console("پنل مسئول", &name, "").into_response()
        }
        Err(redirect) => redirect,
    }
}

/// Host console; exact `host` role required
pub async fn host_console(session: Option<CurrentSession>) -> Response {
    match landing(session, Role::Host) {
        Ok(name) => {
            let name = if name.is_empty() { Message::DefaultHostName.text().to_string() } else { name };
            console("پنل مدیر کل", &name, r#"<p><a href="/swagger-ui">API</a></p>"#).into_response()
        }
        Err(redirect) => redirect,
    }
}
