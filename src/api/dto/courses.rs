/*
 * Responsibility
 * - Courses の request/response DTO
 * - 作成時の owner は認証済みユーザーで決まる (body の userId は一致確認のみ)
 * - 更新は partial (送られたフィールドだけ変更)
 */
use serde::{Deserialize, Serialize};

use crate::api::dto::present;
use crate::repos::{CourseChanges, CourseWithOwner, NewCourse};
use crate::validation::{ValidationErrors, required_text};

const TITLE_MISSING: &str = "A title is required";
const TITLE_EMPTY: &str = "Please provide a title";
const DESCRIPTION_MISSING: &str = "A description is required";
const DESCRIPTION_EMPTY: &str = "Please provide a description";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: Option<i64>,
}

impl CreateCourseRequest {
    /// True when the body names an owner other than `user_id`.
    pub fn names_other_owner(&self, user_id: i64) -> bool {
        self.user_id.is_some_and(|id| id != user_id)
    }

    pub fn validate(&self, owner_id: i64) -> Result<NewCourse, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = required_text(
            &mut errors,
            self.title.as_deref(),
            TITLE_MISSING,
            TITLE_EMPTY,
        );
        let description = required_text(
            &mut errors,
            self.description.as_deref(),
            DESCRIPTION_MISSING,
            DESCRIPTION_EMPTY,
        );

        match (title, description) {
            (Some(title), Some(description)) => Ok(NewCourse {
                title,
                description,
                estimated_time: self.estimated_time.clone(),
                materials_needed: self.materials_needed.clone(),
                user_id: owner_id,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    // Tri-state:
    // - None: field missing (do not update)
    // - Some(None): null
    // - Some(Some(v)): set value
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub estimated_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub materials_needed: Option<Option<String>>,
}

impl UpdateCourseRequest {
    pub fn validate(self) -> Result<CourseChanges, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        // title / description are NOT NULL: null is "missing", blank is "empty"
        let title = self.title.and_then(|v| {
            required_text(&mut errors, v.as_deref(), TITLE_MISSING, TITLE_EMPTY)
        });
        let description = self.description.and_then(|v| {
            required_text(
                &mut errors,
                v.as_deref(),
                DESCRIPTION_MISSING,
                DESCRIPTION_EMPTY,
            )
        });

        errors.into_result(CourseChanges {
            title,
            description,
            estimated_time: self.estimated_time,
            materials_needed: self.materials_needed,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64,
    #[serde(rename = "User")]
    pub owner: OwnerResponse,
}

impl From<CourseWithOwner> for CourseResponse {
    fn from(row: CourseWithOwner) -> Self {
        let CourseWithOwner { course, owner } = row;
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            estimated_time: course.estimated_time,
            materials_needed: course.materials_needed,
            user_id: course.user_id,
            owner: OwnerResponse {
                first_name: owner.first_name,
                last_name: owner.last_name,
                email_address: owner.email_address,
            },
        }
    }
}
