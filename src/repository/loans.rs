//! Loans repository for database operations

use super::Repository;
use crate::{
    error::AppResult,
    models::loan::{Loan, UpdateLoan},
};

impl Repository {
    /// Active loans, or every loan when `include_returned` is set
    pub async fn loans_list(&self, include_returned: bool) -> AppResult<Vec<Loan>> {
        let query = if include_returned {
            "SELECT id, borrower, book_title, return_date, returned FROM loans ORDER BY id"
        } else {
            "SELECT id, borrower, book_title, return_date, returned FROM loans WHERE returned = 0 ORDER BY id"
        };

        let loans = sqlx::query_as::<_, Loan>(query).fetch_all(&self.pool).await?;
        Ok(loans)
    }

    pub async fn loans_get_by_id(&self, id: i64) -> AppResult<Option<Loan>> {
        let loan = sqlx::query_as::<_, Loan>(
            "SELECT id, borrower, book_title, return_date, returned FROM loans WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(loan)
    }

    pub async fn loans_create(&self, borrower: &str, book_title: &str, return_date: &str) -> AppResult<i64> {
        let result = sqlx::query("INSERT INTO loans (borrower, book_title, return_date) VALUES (?, ?, ?)")
            .bind(borrower)
            .bind(book_title)
            .bind(return_date)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Soft return: the row stays, flagged as returned
    pub async fn loans_mark_returned(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("UPDATE loans SET returned = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Overwrite borrower, title and date, absent values included
    pub async fn loans_update(&self, id: i64, loan: &UpdateLoan) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE loans SET borrower = ?, book_title = ?, return_date = ? WHERE id = ?",
        )
        .bind(&loan.borrower)
        .bind(&loan.book_title)
        .bind(&loan.return_date)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
