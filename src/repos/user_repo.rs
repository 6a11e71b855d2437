/*
 * Responsibility
 * - users の永続化インターフェース (UserRepo)
 * - Row / 新規作成用の型
 * - 実装は postgres.rs (sqlx) と memory.rs (tests / local)
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    #[sqlx(rename = "firstName")]
    pub first_name: String,
    #[sqlx(rename = "lastName")]
    pub last_name: String,
    #[sqlx(rename = "emailAddress")]
    pub email_address: String,
    // bcrypt hash, never the plaintext
    #[sqlx(rename = "password")]
    pub password_hash: String,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Already validated and hashed; the repo only enforces store constraints.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password_hash: String,
}

#[async_trait]
pub trait UserRepo: Send + Sync + 'static {
    // Backend name for startup logging.
    fn backend_name(&self) -> &'static str;

    // Exact-match lookup. `emailAddress` is unique so at most one row.
    async fn find_by_email(&self, email_address: &str) -> RepoResult<Option<UserRow>>;

    // Duplicate email is reported as `RepoError::Validation`.
    async fn create(&self, new_user: NewUser) -> RepoResult<UserRow>;
}
