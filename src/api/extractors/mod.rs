/*
 * Responsibility
 * - handler が受け取る extractor 群
 * - rejection はすべて AppError に揃える
 */
mod current_user;
mod json;
mod path;

pub use current_user::CurrentUser;
pub use json::ApiJson;
pub use path::ApiPath;
