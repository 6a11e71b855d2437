/**
 * Responsibility
 * - repo が上位に伝える意味の定義
 * - 制約違反 (unique / FK / not-null) は adapter 側で ValidationErrors に変換する
 */
use thiserror::Error;

use crate::validation::ValidationErrors;

pub const EMAIL_TAKEN: &str = "The email address you entered already exists";
pub const DUPLICATE_VALUE: &str = "A record with the same value already exists";
pub const OWNER_MISSING: &str = "The referenced user does not exist";
pub const VALUE_REQUIRED: &str = "A required value is missing";

// SQLSTATE
const NOT_NULL_VIOLATION: &str = "23502";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("db error")]
    Db(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

impl RepoError {
    pub fn validation(message: impl Into<String>) -> Self {
        RepoError::Validation(ValidationErrors::single(message))
    }

    pub fn from_sqlx(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(dbe) = &e {
            if let Some(message) = constraint_message(dbe.code().as_deref(), dbe.constraint()) {
                return RepoError::validation(message);
            }
        }
        RepoError::Db(e)
    }
}

/// Constraint violations the caller can fix; `None` for everything else.
fn constraint_message(code: Option<&str>, constraint: Option<&str>) -> Option<&'static str> {
    match code? {
        UNIQUE_VIOLATION => Some(match constraint {
            Some(c) if c.contains("email") => EMAIL_TAKEN,
            _ => DUPLICATE_VALUE,
        }),
        FOREIGN_KEY_VIOLATION => Some(OWNER_MISSING),
        NOT_NULL_VIOLATION => Some(VALUE_REQUIRED),
        _ => None,
    }
}
