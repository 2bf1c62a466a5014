//! Loan management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    i18n::Message,
    models::loan::{CreateLoan, Loan, UpdateLoan},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, include_returned: bool) -> AppResult<Vec<Loan>> {
        self.repository.loans_list(include_returned).await
    }

    /// Register a loan; borrower, title and return date are all required
    pub async fn create(&self, loan: CreateLoan) -> AppResult<i64> {
        loan.validate()
            .map_err(|_| AppError::Validation(Message::AllFieldsRequired))?;

        let (Some(borrower), Some(book_title), Some(return_date)) = (loan.borrower, loan.book_title, loan.return_date) else {
            return Err(AppError::Validation(Message::AllFieldsRequired));
        };

        self.repository
            .loans_create(&borrower, &book_title, &return_date)
            .await
    }

    /// Flag a loan as returned; the row is kept
    pub async fn mark_returned(&self, id: i64) -> AppResult<()> {
        if self.repository.loans_mark_returned(id).await? == 0 {
            tracing::debug!("Loan {} not found, nothing returned", id);
        }
        Ok(())
    }

    pub async fn update(&self, id: i64, loan: UpdateLoan) -> AppResult<()> {
        self.repository.loans_update(id, &loan).await?;
        Ok(())
    }
}
