/*
 * Responsibility
 * - UserRepo / CourseRepo の in-memory 実装 (integration tests / DB なしのローカル確認用)
 * - Postgres 側と同じ制約 (email unique, userId FK) を同じメッセージで返す
 */
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::repos::course_repo::{
    CourseChanges, CourseRepo, CourseRow, CourseWithOwner, NewCourse, OwnerSummary,
};
use crate::repos::error::{EMAIL_TAKEN, OWNER_MISSING, RepoError, RepoResult};
use crate::repos::user_repo::{NewUser, UserRepo, UserRow};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, UserRow>,
    courses: BTreeMap<i64, CourseRow>,
    last_user_id: i64,
    last_course_id: i64,
}

impl Tables {
    fn with_owner(&self, course: &CourseRow) -> Option<CourseWithOwner> {
        let owner = self.users.get(&course.user_id)?;
        Some(CourseWithOwner {
            course: course.clone(),
            owner: OwnerSummary {
                first_name: owner.first_name.clone(),
                last_name: owner.last_name.clone(),
                email_address: owner.email_address.clone(),
            },
        })
    }
}

/// Cheap to clone; all clones share the same tables.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // The lock is never held across an await, so a poisoned lock only means
    // a panic happened mid-write in another test thread.
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl UserRepo for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn find_by_email(&self, email_address: &str) -> RepoResult<Option<UserRow>> {
        let tables = self.tables();
        Ok(tables
            .users
            .values()
            .find(|u| u.email_address == email_address)
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> RepoResult<UserRow> {
        let mut tables = self.tables();
        if tables
            .users
            .values()
            .any(|u| u.email_address == new_user.email_address)
        {
            return Err(RepoError::validation(EMAIL_TAKEN));
        }

        tables.last_user_id += 1;
        let now = Utc::now();
        let row = UserRow {
            id: tables.last_user_id,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email_address: new_user.email_address,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(row.id, row.clone());
        Ok(row)
    }
}

#[async_trait]
impl CourseRepo for MemoryStore {
    async fn list(&self) -> RepoResult<Vec<CourseWithOwner>> {
        let tables = self.tables();
        Ok(tables
            .courses
            .values()
            .filter_map(|c| tables.with_owner(c))
            .collect())
    }

    async fn get_with_owner(&self, course_id: i64) -> RepoResult<Option<CourseWithOwner>> {
        let tables = self.tables();
        Ok(tables
            .courses
            .get(&course_id)
            .and_then(|c| tables.with_owner(c)))
    }

    async fn get(&self, course_id: i64) -> RepoResult<Option<CourseRow>> {
        Ok(self.tables().courses.get(&course_id).cloned())
    }

    async fn create(&self, new_course: NewCourse) -> RepoResult<CourseRow> {
        let mut tables = self.tables();
        if !tables.users.contains_key(&new_course.user_id) {
            return Err(RepoError::validation(OWNER_MISSING));
        }

        tables.last_course_id += 1;
        let now = Utc::now();
        let row = CourseRow {
            id: tables.last_course_id,
            title: new_course.title,
            description: new_course.description,
            estimated_time: new_course.estimated_time,
            materials_needed: new_course.materials_needed,
            user_id: new_course.user_id,
            created_at: now,
            updated_at: now,
        };
        tables.courses.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        course_id: i64,
        changes: CourseChanges,
    ) -> RepoResult<Option<CourseRow>> {
        let mut tables = self.tables();
        let Some(row) = tables.courses.get_mut(&course_id) else {
            return Ok(None);
        };

        if let Some(title) = changes.title {
            row.title = title;
        }
        if let Some(description) = changes.description {
            row.description = description;
        }
        if let Some(estimated_time) = changes.estimated_time {
            row.estimated_time = estimated_time;
        }
        if let Some(materials_needed) = changes.materials_needed {
            row.materials_needed = materials_needed;
        }
        row.updated_at = Utc::now();

        Ok(Some(row.clone()))
    }

    async fn delete(&self, course_id: i64) -> RepoResult<bool> {
        Ok(self.tables().courses.remove(&course_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            first_name: "Joe".into(),
            last_name: "Smith".into(),
            email_address: email.into(),
            password_hash: "$2b$04$not-a-real-hash".into(),
        }
    }

    fn new_course(user_id: i64) -> NewCourse {
        NewCourse {
            title: "Build a Basic Bookcase".into(),
            description: "High-end furniture projects.".into(),
            estimated_time: Some("12 hours".into()),
            materials_needed: None,
            user_id,
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_a_validation_error() {
        let store = MemoryStore::new();
        let first = UserRepo::create(&store, new_user("joe@smith.com")).await.unwrap();

        let err = UserRepo::create(&store, new_user("joe@smith.com"))
            .await
            .unwrap_err();
        match err {
            RepoError::Validation(v) => assert_eq!(v.messages(), [EMAIL_TAKEN]),
            other => panic!("unexpected: {other:?}"),
        }

        let found = store.find_by_email("joe@smith.com").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn course_requires_existing_owner() {
        let store = MemoryStore::new();
        let err = CourseRepo::create(&store, new_course(42)).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn update_is_partial_and_tri_state() {
        let store = MemoryStore::new();
        let user = UserRepo::create(&store, new_user("joe@smith.com")).await.unwrap();
        let course = CourseRepo::create(&store, new_course(user.id)).await.unwrap();

        let updated = store
            .update(
                course.id,
                CourseChanges {
                    title: Some("Learn How to Program".into()),
                    estimated_time: Some(None),
                    materials_needed: Some(Some("A laptop".into())),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Learn How to Program");
        assert_eq!(updated.description, course.description);
        assert_eq!(updated.estimated_time, None);
        assert_eq!(updated.materials_needed.as_deref(), Some("A laptop"));
    }

    #[tokio::test]
    async fn delete_then_get_is_none() {
        let store = MemoryStore::new();
        let user = UserRepo::create(&store, new_user("joe@smith.com")).await.unwrap();
        let course = CourseRepo::create(&store, new_course(user.id)).await.unwrap();

        assert!(store.delete(course.id).await.unwrap());
        assert!(store.get(course.id).await.unwrap().is_none());
        assert!(!store.delete(course.id).await.unwrap());
    }

    #[tokio::test]
    async fn list_joins_owner() {
        let store = MemoryStore::new();
        let user = UserRepo::create(&store, new_user("joe@smith.com")).await.unwrap();
        CourseRepo::create(&store, new_course(user.id)).await.unwrap();

        let courses = store.list().await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].owner.email_address, "joe@smith.com");
    }
}
