//! Book catalog model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
}

/// Body of book create and update requests
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookTitle {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
}
