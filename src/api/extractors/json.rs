use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with malformed bodies reported as `AppError::BadRequest`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
