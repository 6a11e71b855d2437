/*
 * Responsibility
 * - courses の永続化インターフェース (CourseRepo)
 * - userId の FK 前提: owner が存在しない course は作れない
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, FromRow)]
pub struct CourseRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[sqlx(rename = "estimatedTime")]
    pub estimated_time: Option<String>,
    #[sqlx(rename = "materialsNeeded")]
    pub materials_needed: Option<String>,
    #[sqlx(rename = "userId")]
    pub user_id: i64,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Public fields of the owning user, joined onto course reads.
#[derive(Debug, Clone, FromRow)]
pub struct OwnerSummary {
    #[sqlx(rename = "firstName")]
    pub first_name: String,
    #[sqlx(rename = "lastName")]
    pub last_name: String,
    #[sqlx(rename = "emailAddress")]
    pub email_address: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct CourseWithOwner {
    #[sqlx(flatten)]
    pub course: CourseRow,
    #[sqlx(flatten)]
    pub owner: OwnerSummary,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64,
}

/// Partial update.
///
/// - `title` / `description`: `None` keeps the current value
/// - `estimated_time` / `materials_needed` are tri-state:
///   `None` keep, `Some(None)` set NULL, `Some(Some(v))` set v
#[derive(Debug, Clone, Default)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<Option<String>>,
    pub materials_needed: Option<Option<String>>,
}

#[async_trait]
pub trait CourseRepo: Send + Sync + 'static {
    async fn list(&self) -> RepoResult<Vec<CourseWithOwner>>;

    async fn get_with_owner(&self, course_id: i64) -> RepoResult<Option<CourseWithOwner>>;

    async fn get(&self, course_id: i64) -> RepoResult<Option<CourseRow>>;

    // Unknown `user_id` is reported as `RepoError::Validation`.
    async fn create(&self, new_course: NewCourse) -> RepoResult<CourseRow>;

    async fn update(&self, course_id: i64, changes: CourseChanges)
    -> RepoResult<Option<CourseRow>>;

    async fn delete(&self, course_id: i64) -> RepoResult<bool>;
}
