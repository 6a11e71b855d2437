/*
 * Responsibility
 * - /api の URL 構造を定義
 * - Basic auth が必要な範囲 (protected) と不要な範囲 (public) を分けて merge
 *   同じ path でも method ごとに認証要否が違う (/users: GET は要、POST は不要)
 * - auth は handler 単位で掛ける (未対応 method は 401 ではなく 405)
 */
use axum::{
    Router,
    routing::{get, post, put},
};

use crate::api::handlers::{
    courses::{create_course, delete_course, get_course, list_courses, update_course},
    users::{create_user, current_user},
};
use crate::middleware::auth::basic;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/users", post(create_user))
        .route("/courses", get(list_courses))
        .route("/courses/{course_id}", get(get_course));

    let protected = Router::new()
        .route("/users", basic::protect(get(current_user), &state))
        .route("/courses", basic::protect(post(create_course), &state))
        .route(
            "/courses/{course_id}",
            basic::protect(put(update_course).delete(delete_course), &state),
        );

    public.merge(protected)
}
