//! Loan model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Loan row. `book_title` is a free-text copy, not a book reference.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i64,
    pub borrower: Option<String>,
    pub book_title: Option<String>,
    pub return_date: Option<String>,
    pub returned: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLoan {
    #[validate(required, length(min = 1))]
    pub borrower: Option<String>,
    #[validate(required, length(min = 1))]
    pub book_title: Option<String>,
    #[validate(required, length(min = 1))]
    pub return_date: Option<String>,
}

/// Full overwrite of a loan; absent fields are stored as NULL
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateLoan {
    pub borrower: Option<String>,
    pub book_title: Option<String>,
    pub return_date: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct LoanQuery {
    /// Also list loans already returned
    pub include_returned: Option<bool>,
}
