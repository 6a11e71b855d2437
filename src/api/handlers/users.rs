/*
 * Responsibility
 * - GET /api/users: 認証済みユーザー自身を返す
 * - POST /api/users: self-registration (認証なし)
 *   validate → bcrypt hash → repo create (email 重複は repo が ValidationErrors で返す)
 */
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    api::{
        dto::users::{CreateUserRequest, UserResponse},
        extractors::{ApiJson, CurrentUser},
    },
    error::AppError,
    repos::NewUser,
    state::AppState,
};

pub async fn current_user(user: CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let registration = req.validate()?;

    let password_hash = state.passwords.hash(&registration.password).await?;

    let row = state
        .users
        .create(NewUser {
            first_name: registration.first_name,
            last_name: registration.last_name,
            email_address: registration.email_address,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = row.id, "user registered");

    Ok((StatusCode::CREATED, [(header::LOCATION, "/")]))
}
