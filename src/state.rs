/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - users / courses repo, password hasher, authenticator
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use sqlx::PgPool;

use crate::repos::{CourseRepo, MemoryStore, PgCourseRepo, PgUserRepo, UserRepo};
use crate::services::auth::{Authenticator, PasswordHasher};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepo>,
    pub courses: Arc<dyn CourseRepo>,
    pub passwords: PasswordHasher,
    pub auth: Arc<Authenticator>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepo>,
        courses: Arc<dyn CourseRepo>,
        passwords: PasswordHasher,
    ) -> Self {
        let auth = Arc::new(Authenticator::new(users.clone(), passwords));
        Self {
            users,
            courses,
            passwords,
            auth,
        }
    }

    pub fn postgres(pool: PgPool, passwords: PasswordHasher) -> Self {
        Self::new(
            Arc::new(PgUserRepo::new(pool.clone())),
            Arc::new(PgCourseRepo::new(pool)),
            passwords,
        )
    }

    pub fn in_memory(passwords: PasswordHasher) -> Self {
        let store = MemoryStore::new();
        Self::new(Arc::new(store.clone()), Arc::new(store), passwords)
    }
}
