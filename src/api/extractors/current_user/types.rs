/*
 * Responsibility
 * - Handler から見える「認証済みユーザー」の型
 * - 1 リクエストの間だけ有効。セッションやキャッシュには載せない
 */
use crate::repos::UserRow;

/// The user resolved from Basic credentials for this request.
///
/// Carries no password material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<UserRow> for CurrentUser {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email_address: row.email_address,
        }
    }
}
