use axum::extract::FromRequestParts;

use crate::error::AppError;

/// `axum::extract::Path` with parse failures (e.g. `/courses/abc`) reported as `AppError::BadRequest`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
