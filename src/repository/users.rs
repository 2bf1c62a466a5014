//! User account domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    i18n::Message,
    models::user::{AdminSummary, Role, User},
};

impl Repository {
    /// Get user by username
    pub async fn users_get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, fullname, role FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Whether any account, of any role, has this username
    pub async fn users_exists(&self, username: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Count accounts with the given role
    pub async fn users_count_by_role(&self, role: Role) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = ?")
            .bind(role)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Insert an account; a taken username is a conflict
    pub async fn users_create(
        &self,
        username: &str,
        password_hash: &str,
        fullname: &str,
        role: Role,
    ) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO users (username, password_hash, fullname, role) VALUES (?, ?, ?, ?)",
        )
        .bind(username)
        .bind(password_hash)
        .bind(fullname)
        .bind(role)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::conflict_on_unique(e, Message::UsernameTaken))?;

        Ok(result.last_insert_rowid())
    }

    /// Overwrite the password hash of an account
    pub async fn users_update_password(&self, username: &str, password_hash: &str) -> AppResult<u64> {
        let result = sqlx::query("UPDATE users SET password_hash = ? WHERE username = ?")
            .bind(password_hash)
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Rename a host account
    pub async fn users_rename_host(&self, current: &str, new_username: &str) -> AppResult<u64> {
        let result = sqlx::query("UPDATE users SET username = ? WHERE username = ? AND role = 'host'")
            .bind(new_username)
            .bind(current)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, Message::UsernameTaken))?;
        Ok(result.rows_affected())
    }

    /// List admin accounts in storage order
    pub async fn users_list_admins(&self) -> AppResult<Vec<AdminSummary>> {
        let admins = sqlx::query_as::<_, AdminSummary>(
            "SELECT username, fullname FROM users WHERE role = 'admin' ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(admins)
    }

    /// Overwrite every field of an admin account
    pub async fn users_update_admin(
        &self,
        username: &str,
        fullname: &str,
        password_hash: &str,
        new_username: &str,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users SET fullname = ?, password_hash = ?, username = ?
            WHERE username = ? AND role = 'admin'
            "#,
        )
        .bind(fullname)
        .bind(password_hash)
        .bind(new_username)
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::conflict_on_unique(e, Message::NewUsernameTaken))?;
        Ok(result.rows_affected())
    }

    /// Delete an admin account; hosts are never matched
    pub async fn users_delete_admin(&self, username: &str) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM users WHERE username = ? AND role = 'admin'")
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
