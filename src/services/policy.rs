/*
 * Responsibility
 * - リソース単位の認可 (BOLA チェック)
 * - course の更新/削除は owner のみ
 */
use crate::repos::CourseRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotOwner;

pub fn ensure_course_owner(user_id: i64, course: &CourseRow) -> Result<(), NotOwner> {
    if course.user_id == user_id {
        Ok(())
    } else {
        Err(NotOwner)
    }
}
