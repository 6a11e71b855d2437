/*!
 * Authenticated identity extractor
 *
 * Responsibility:
 * - Basic auth middleware が extensions に入れた CurrentUser を handler に渡す
 * - 型定義は types、axum 依存は core
 */

mod core;
mod types;

pub use types::CurrentUser;
