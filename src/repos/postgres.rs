/*
 * Responsibility
 * - UserRepo / CourseRepo の PostgreSQL 実装 (sqlx)
 * - "Users" / "Courses" テーブル (camelCase カラム) 向け SQL
 * - DB エラーは RepoError::from_sqlx で意味付けして返す
 */
use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::course_repo::{CourseChanges, CourseRepo, CourseRow, CourseWithOwner, NewCourse};
use crate::repos::error::{RepoError, RepoResult};
use crate::repos::user_repo::{NewUser, UserRepo, UserRow};

#[derive(Clone, Debug)]
pub struct PgUserRepo {
    pool: PgPool,
}

impl PgUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepo for PgUserRepo {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn find_by_email(&self, email_address: &str) -> RepoResult<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, "firstName", "lastName", "emailAddress", password, "createdAt", "updatedAt"
            FROM "Users"
            WHERE "emailAddress" = $1
            "#,
        )
        .bind(email_address)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(row)
    }

    async fn create(&self, new_user: NewUser) -> RepoResult<UserRow> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO "Users" ("firstName", "lastName", "emailAddress", password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, "firstName", "lastName", "emailAddress", password, "createdAt", "updatedAt"
            "#,
        )
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.email_address)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(row)
    }
}

#[derive(Clone, Debug)]
pub struct PgCourseRepo {
    pool: PgPool,
}

impl PgCourseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepo for PgCourseRepo {
    async fn list(&self) -> RepoResult<Vec<CourseWithOwner>> {
        let rows = sqlx::query_as::<_, CourseWithOwner>(
            r#"
            SELECT
                c.id, c.title, c.description, c."estimatedTime", c."materialsNeeded",
                c."userId", c."createdAt", c."updatedAt",
                u."firstName", u."lastName", u."emailAddress"
            FROM "Courses" c
            JOIN "Users" u ON u.id = c."userId"
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(rows)
    }

    async fn get_with_owner(&self, course_id: i64) -> RepoResult<Option<CourseWithOwner>> {
        let row = sqlx::query_as::<_, CourseWithOwner>(
            r#"
            SELECT
                c.id, c.title, c.description, c."estimatedTime", c."materialsNeeded",
                c."userId", c."createdAt", c."updatedAt",
                u."firstName", u."lastName", u."emailAddress"
            FROM "Courses" c
            JOIN "Users" u ON u.id = c."userId"
            WHERE c.id = $1
            "#,
        )
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(row)
    }

    async fn get(&self, course_id: i64) -> RepoResult<Option<CourseRow>> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT
                id, title, description, "estimatedTime", "materialsNeeded",
                "userId", "createdAt", "updatedAt"
            FROM "Courses"
            WHERE id = $1
            "#,
        )
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(row)
    }

    async fn create(&self, new_course: NewCourse) -> RepoResult<CourseRow> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO "Courses" (title, description, "estimatedTime", "materialsNeeded", "userId")
            VALUES ($1, $2, $3, $4, $5)
            RETURNING
                id, title, description, "estimatedTime", "materialsNeeded",
                "userId", "createdAt", "updatedAt"
            "#,
        )
        .bind(&new_course.title)
        .bind(&new_course.description)
        .bind(new_course.estimated_time.as_deref())
        .bind(new_course.materials_needed.as_deref())
        .bind(new_course.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(row)
    }

    async fn update(
        &self,
        course_id: i64,
        changes: CourseChanges,
    ) -> RepoResult<Option<CourseRow>> {
        // $4 / $6: whether to touch the nullable column at all
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            UPDATE "Courses"
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                "estimatedTime" = CASE
                    WHEN $4::boolean THEN $5::text
                    ELSE "estimatedTime"
                END,
                "materialsNeeded" = CASE
                    WHEN $6::boolean THEN $7::text
                    ELSE "materialsNeeded"
                END,
                "updatedAt" = NOW()
            WHERE id = $1
            RETURNING
                id, title, description, "estimatedTime", "materialsNeeded",
                "userId", "createdAt", "updatedAt"
            "#,
        )
        .bind(course_id)
        .bind(changes.title.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.estimated_time.is_some())
        .bind(changes.estimated_time.flatten())
        .bind(changes.materials_needed.is_some())
        .bind(changes.materials_needed.flatten())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(row)
    }

    async fn delete(&self, course_id: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM "Courses"
            WHERE id = $1
            "#,
        )
        .bind(course_id)
        .execute(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
