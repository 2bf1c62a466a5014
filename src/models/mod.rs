//! Data models for Libris

pub mod book;
pub mod import_report;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use book::Book;
pub use import_report::{ImportReport, RowError};
pub use loan::Loan;
pub use user::{AdminSummary, Role, SessionClaims, User};
