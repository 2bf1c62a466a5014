//! Book catalog service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    i18n::Message,
    models::book::{Book, BookTitle},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books_list().await
    }

    pub async fn create_book(&self, book: BookTitle) -> AppResult<i64> {
        book.validate()
            .map_err(|_| AppError::Validation(Message::BookTitleRequired))?;
        let title = book.title.unwrap_or_default();
        self.repository.books_create(&title).await
    }

    /// Rename a book; unknown ids are ignored
    pub async fn update_book(&self, id: i64, book: BookTitle) -> AppResult<()> {
        book.validate()
            .map_err(|_| AppError::Validation(Message::NewTitleRequired))?;
        let title = book.title.unwrap_or_default();
        if self.repository.books_update(id, &title).await? == 0 {
            tracing::debug!("Book {} not found, nothing updated", id);
        }
        Ok(())
    }

    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        if self.repository.books_delete(id).await? == 0 {
            tracing::debug!("Book {} not found, nothing deleted", id);
        }
        Ok(())
    }
}
