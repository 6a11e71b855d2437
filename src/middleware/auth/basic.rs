//! Basic 認証 → CurrentUser を extensions に入れる
//!
//! - `Authorization: Basic base64(email:password)` を解析
//! - Authenticator で user lookup + bcrypt verify
//! - 失敗理由 (header なし / user なし / password 不一致) はログのみ。レスポンスは常に同じ 401
//! - store / hashing の障害は 401 ではなく 500

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};

use crate::api::extractors::CurrentUser;
use crate::error::AppError;
use crate::services::auth::{AuthError, parse_basic};
use crate::state::AppState;

/// Require Basic auth on the handlers already added to `route`.
///
/// Layered per method router: the method-not-allowed fallback stays outside,
/// so an unsupported method on a shared path is 405, never 401.
pub fn protect(route: MethodRouter<AppState>, state: &AppState) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(
        state.clone(),
        basic_auth_middleware,
    ))
}

async fn basic_auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_basic);

    let user = match state.auth.authenticate(credentials).await {
        Ok(user) => user,
        Err(AuthError::Rejected(failure)) => {
            tracing::warn!(
                method = %req.method(),
                uri = %req.uri(),
                "{failure}"
            );
            return Err(AppError::Unauthorized);
        }
        Err(err) => {
            tracing::error!(error = ?err, "authentication backend failure");
            return Err(AppError::Internal);
        }
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(CurrentUser::from(user));

    Ok(next.run(req).await)
}
