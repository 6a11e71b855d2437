/*
 * Responsibility
 * - /api/courses 系 CRUD handler
 * - 更新/削除は owner チェック (policy) を通ってから repo を呼ぶ
 * - body は ownership 判定の後に解釈する (非 owner には 403 だけを返す)
 */
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::Value;

use crate::{
    api::{
        dto::courses::{CourseResponse, CreateCourseRequest, UpdateCourseRequest},
        extractors::{ApiJson, ApiPath, CurrentUser},
    },
    error::AppError,
    repos::CourseRow,
    services::policy::ensure_course_owner,
    state::AppState,
};

const COURSE: &str = "Course";

fn parse_body<T: serde::de::DeserializeOwned>(body: Value) -> Result<T, AppError> {
    serde_json::from_value(body).map_err(|e| AppError::bad_request("INVALID_BODY", e.to_string()))
}

async fn owned_course(
    state: &AppState,
    user: &CurrentUser,
    course_id: i64,
) -> Result<CourseRow, AppError> {
    let course = state
        .courses
        .get(course_id)
        .await?
        .ok_or(AppError::not_found(COURSE))?;

    ensure_course_owner(user.id, &course).inspect_err(|_| {
        tracing::warn!(
            user_id = user.id,
            course_id,
            owner_id = course.user_id,
            "course mutation refused: not the owner"
        );
    })?;

    Ok(course)
}

pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let rows = state.courses.list().await?;
    Ok(Json(rows.into_iter().map(CourseResponse::from).collect()))
}

pub async fn get_course(
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i64>,
) -> Result<Json<CourseResponse>, AppError> {
    let row = state
        .courses
        .get_with_owner(course_id)
        .await?
        .ok_or(AppError::not_found(COURSE))?;

    Ok(Json(CourseResponse::from(row)))
}

pub async fn create_course(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(body): ApiJson<Value>,
) -> Result<impl IntoResponse, AppError> {
    let req: CreateCourseRequest = parse_body(body.clone())?;

    if req.names_other_owner(user.id) {
        tracing::warn!(
            user_id = user.id,
            requested_owner = ?req.user_id,
            "course creation refused: userId names another user"
        );
        return Err(AppError::Forbidden);
    }

    let new_course = req.validate(user.id)?;
    let row = state.courses.create(new_course).await?;

    tracing::info!(user_id = user.id, course_id = row.id, "course created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/courses/{}", row.id))],
        Json(body),
    ))
}

pub async fn update_course(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiPath(course_id): ApiPath<i64>,
    ApiJson(body): ApiJson<Value>,
) -> Result<StatusCode, AppError> {
    owned_course(&state, &user, course_id).await?;

    let changes = parse_body::<UpdateCourseRequest>(body)?.validate()?;

    state
        .courses
        .update(course_id, changes)
        .await?
        .ok_or(AppError::not_found(COURSE))?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_course(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiPath(course_id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    owned_course(&state, &user, course_id).await?;

    if state.courses.delete(course_id).await? {
        tracing::info!(user_id = user.id, course_id, "course deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(COURSE))
    }
}
