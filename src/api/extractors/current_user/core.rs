use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

use super::CurrentUser;

/// middleware が CurrentUser を request.extensions() に insert 済みである前提
/// 見つからない場合は 401（route に Basic auth が掛かっていない）
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}
