//! Localized user-facing messages
//!
//! Every message returned to a client (errors and confirmations) goes through
//! [`Message`], rendered in the locale chosen at start-up.

use once_cell::sync::OnceCell;
use serde::Deserialize;

static LOCALE: OnceCell<Locale> = OnceCell::new();

/// Supported message locales
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fa,
    En,
}

/// Set the process-wide locale. Only the first call has an effect.
pub fn set_locale(locale: Locale) {
    if LOCALE.set(locale).is_err() {
        tracing::debug!("Locale already set, keeping {:?}", self::locale());
    }
}

/// Current locale (Persian until configured otherwise)
pub fn locale() -> Locale {
    LOCALE.get().copied().unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Authentication
    LoginFailed,
    AccessDenied,
    WrongCurrentPassword,
    NewPasswordRequired,
    PasswordChanged,
    NewUsernameRequired,
    UsernameTaken,
    NewUsernameTaken,
    UsernameChanged,
    // Import
    NoFileSent,
    UnreadableSpreadsheet,
    // Books
    BookTitleRequired,
    BookAdded,
    BookDeleted,
    NewTitleRequired,
    BookUpdated,
    // Loans
    AllFieldsRequired,
    LoanRegistered,
    LoanReturned,
    LoanUpdated,
    // Admin accounts
    AdminCreated,
    AdminUpdated,
    AdminDeleted,
    PrimaryAdminProtected,
    // Generic
    DatabaseError,
    ServerError,
    DefaultAdminName,
    DefaultHostName,
}

impl Message {
    /// Text in the process-wide locale
    pub fn text(self) -> &'static str {
        self.text_in(locale())
    }

    pub fn text_in(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Fa => self.fa(),
            Locale::En => self.en(),
        }
    }

    fn fa(self) -> &'static str {
        match self {
            Message::LoginFailed => "❌ نام کاربری یا رمز عبور اشتباه است",
            Message::AccessDenied => "دسترسی غیرمجاز",
            Message::WrongCurrentPassword => "رمز فعلی اشتباه است",
            Message::NewPasswordRequired => "رمز عبور جدید الزامی است",
            Message::PasswordChanged => "رمز عبور با موفقیت تغییر کرد",
            Message::NewUsernameRequired => "نام کاربری جدید الزامی است",
            Message::UsernameTaken => "نام کاربری قبلاً وجود دارد",
            Message::NewUsernameTaken => "نام کاربری جدید قبلاً وجود دارد",
            Message::UsernameChanged => "نام کاربری با موفقیت تغییر کرد",
            Message::NoFileSent => "فایلی ارسال نشده",
            Message::UnreadableSpreadsheet => "فایل ارسال‌شده قابل خواندن نیست",
            Message::BookTitleRequired => "عنوان کتاب الزامی است",
            Message::BookAdded => "کتاب اضافه شد",
            Message::BookDeleted => "کتاب حذف شد",
            Message::NewTitleRequired => "عنوان جدید الزامی است",
            Message::BookUpdated => "کتاب ویرایش شد",
            Message::AllFieldsRequired => "همه‌ی فیلدها الزامی هستند",
            Message::LoanRegistered => "امانت ثبت شد",
            Message::LoanReturned => "تحویل ثبت شد",
            Message::LoanUpdated => "اطلاعات ویرایش شد",
            Message::AdminCreated => "مسئول جدید اضافه شد",
            Message::AdminUpdated => "اطلاعات مسئول ویرایش شد",
            Message::AdminDeleted => "مسئول حذف شد",
            Message::PrimaryAdminProtected => "نمی‌توان مسئول اصلی را حذف کرد",
            Message::DatabaseError => "خطای پایگاه داده",
            Message::ServerError => "خطای داخلی سرور",
            Message::DefaultAdminName => "کاربر",
            Message::DefaultHostName => "مدیر کل",
        }
    }

    fn en(self) -> &'static str {
        match self {
            Message::LoginFailed => "❌ Invalid username or password",
            Message::AccessDenied => "Access denied",
            Message::WrongCurrentPassword => "Current password is incorrect",
            Message::NewPasswordRequired => "New password is required",
            Message::PasswordChanged => "Password changed successfully",
            Message::NewUsernameRequired => "New username is required",
            Message::UsernameTaken => "Username already exists",
            Message::NewUsernameTaken => "New username already exists",
            Message::UsernameChanged => "Username changed successfully",
            Message::NoFileSent => "No file was sent",
            Message::UnreadableSpreadsheet => "The uploaded file could not be read as a spreadsheet",
            Message::BookTitleRequired => "Book title is required",
            Message::BookAdded => "Book added",
            Message::BookDeleted => "Book deleted",
            Message::NewTitleRequired => "New title is required",
            Message::BookUpdated => "Book updated",
            Message::AllFieldsRequired => "All fields are required",
            Message::LoanRegistered => "Loan registered",
            Message::LoanReturned => "Return registered",
            Message::LoanUpdated => "Loan updated",
            Message::AdminCreated => "Administrator created",
            Message::AdminUpdated => "Administrator updated",
            Message::AdminDeleted => "Administrator deleted",
            Message::PrimaryAdminProtected => "The primary administrator cannot be deleted",
            Message::DatabaseError => "Database error",
            Message::ServerError => "Internal server error",
            Message::DefaultAdminName => "User",
            Message::DefaultHostName => "Head administrator",
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
