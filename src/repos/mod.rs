pub mod course_repo;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod user_repo;

pub use course_repo::{CourseChanges, CourseRepo, CourseRow, CourseWithOwner, NewCourse};
pub use error::{RepoError, RepoResult};
pub use memory::MemoryStore;
pub use postgres::{PgCourseRepo, PgUserRepo};
pub use user_repo::{NewUser, UserRepo, UserRow};
