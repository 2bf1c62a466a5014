//! Book catalog domain methods on Repository

use super::Repository;
use crate::{
    error::AppResult,
    models::{book::Book, import_report::RowError},
};

impl Repository {
    /// All books in storage order
    pub async fn books_list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT id, title FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    pub async fn books_create(&self, title: &str) -> AppResult<i64> {
        let result = sqlx::query("INSERT INTO books (title) VALUES (?)")
            .bind(title)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite a title; unknown ids affect no row
    pub async fn books_update(&self, id: i64, title: &str) -> AppResult<u64> {
        let result = sqlx::query("UPDATE books SET title = ? WHERE id = ?")
            .bind(title)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn books_delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Insert `(row, title)` pairs in a single transaction.
    ///
    /// A failing row is recorded and the batch goes on; the transaction is
    /// committed once at the end. Returns the number of inserted rows and the
    /// per-row failures.
    pub async fn books_create_batch(&self, rows: &[(u32, String)]) -> AppResult<(u32, Vec<RowError>)> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;
        let mut failures = Vec::new();

        for (row, title) in rows {
            match sqlx::query("INSERT INTO books (title) VALUES (?)")
                .bind(title)
                .execute(&mut *tx)
                .await
            {
                Ok(_) => inserted += 1,
                Err(e) => failures.push(RowError {
                    row: *row,
                    message: e.to_string(),
                }),
            }
        }

        tx.commit().await?;
        Ok((inserted, failures))
    }
}
