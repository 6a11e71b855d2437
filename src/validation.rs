/*
 * Responsibility
 * - field-level validation の結果型 (ValidationErrors)
 * - request DTO と repo adapter の両方が同じ型で失敗を返す
 *   (エラー名の文字列判定ではなく型で 400 を決める)
 */
use std::fmt;

use serde::Serialize;

/// Ordered list of human-readable validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn single(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// `Ok(value)` when nothing was collected, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Required text field: `None` is "missing", blank is "empty".
///
/// Returns the value only when both rules pass.
pub fn required_text(
    errors: &mut ValidationErrors,
    value: Option<&str>,
    missing: &str,
    empty: &str,
) -> Option<String> {
    match value {
        None => {
            errors.push(missing);
            None
        }
        Some(v) if v.trim().is_empty() => {
            errors.push(empty);
            None
        }
        Some(v) => Some(v.to_string()),
    }
}

/// Loose `local@domain.tld` shape check. Deliverability is not our concern.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
