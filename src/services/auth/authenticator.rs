//! Basic 認証: credentials → user lookup → bcrypt verify
//!
//! The three rejection reasons are kept apart here for server-side logs only;
//! the HTTP layer collapses them into one 401.

use std::sync::Arc;

use thiserror::Error;

use crate::repos::{RepoError, UserRepo, UserRow};
use crate::services::auth::credentials::Credentials;
use crate::services::auth::password::{PasswordError, PasswordHasher};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthFailure {
    #[error("auth header not found")]
    HeaderMissing,
    #[error("user not found for email: {email}")]
    UserNotFound { email: String },
    #[error("authentication failure for user: {first_name} {last_name}")]
    BadPassword {
        first_name: String,
        last_name: String,
    },
}

/// Rejections vs. faults: only `Rejected` maps to 401.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Rejected(#[from] AuthFailure),
    #[error("user lookup failed: {0}")]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Password(#[from] PasswordError),
}

#[derive(Clone)]
pub struct Authenticator {
    users: Arc<dyn UserRepo>,
    passwords: PasswordHasher,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepo>, passwords: PasswordHasher) -> Self {
        Self { users, passwords }
    }

    pub async fn authenticate(
        &self,
        credentials: Option<Credentials>,
    ) -> Result<UserRow, AuthError> {
        let credentials = credentials.ok_or(AuthFailure::HeaderMissing)?;

        let user = self
            .users
            .find_by_email(&credentials.name)
            .await?
            .ok_or_else(|| AuthFailure::UserNotFound {
                email: credentials.name.clone(),
            })?;

        if !self
            .passwords
            .verify(&credentials.pass, &user.password_hash)
            .await?
        {
            return Err(AuthFailure::BadPassword {
                first_name: user.first_name,
                last_name: user.last_name,
            }
            .into());
        }

        tracing::info!(
            user_id = user.id,
            "authentication successful for user: {} {}",
            user.first_name,
            user.last_name
        );

        Ok(user)
    }
}
