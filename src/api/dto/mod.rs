/*
 * Responsibility
 * - request/response DTO
 * - request 側は validate() で ValidationErrors を全件集めて返す
 */
use serde::{Deserialize, Deserializer};

pub mod courses;
pub mod users;

/// Tri-state field helper: with `#[serde(default)]`, a missing key stays
/// `None` while an explicit `null` becomes `Some(None)`.
pub(crate) fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
