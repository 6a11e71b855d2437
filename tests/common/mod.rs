#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Value, json};
use tower::ServiceExt;

use course_api::app::build_router;
use course_api::config::{AppEnv, Config};
use course_api::services::auth::PasswordHasher;
use course_api::state::AppState;

pub const JOE: (&str, &str) = ("joe@smith.com", "joepassword");
pub const SALLY: (&str, &str) = ("sally@jones.com", "sallypassword");

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl Reply {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

fn test_config() -> Config {
    Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        database_url: String::new(),
        database_max_connections: 1,
        app_env: AppEnv::Development,
        cors_allowed_origins: Vec::new(),
        bcrypt_cost: 4,
    }
}

/// Full router (middleware included) over a fresh in-memory store.
pub fn app() -> Router {
    app_with_state(AppState::in_memory(PasswordHasher::new(4)))
}

pub fn app_with_state(state: AppState) -> Router {
    build_router(state, &test_config())
}

pub fn basic(email: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{email}:{password}")))
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> Reply {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = authorization {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&v).unwrap())
        }
        None => Body::empty(),
    };

    let res = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = res.status();
    let headers = res.headers().clone();
    let bytes = axum::body::to_bytes(res.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    Reply {
        status,
        headers,
        body,
    }
}

pub async fn register(app: &Router, first: &str, last: &str, (email, password): (&str, &str)) {
    let reply = send(
        app,
        "POST",
        "/api/users",
        None,
        Some(json!({
            "firstName": first,
            "lastName": last,
            "emailAddress": email,
            "password": password,
        })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED, "register {email}: {:?}", reply.body);
}

/// Registers Joe and Sally.
pub async fn seeded_app() -> Router {
    let app = app();
    register(&app, "Joe", "Smith", JOE).await;
    register(&app, "Sally", "Jones", SALLY).await;
    app
}

/// Creates a course as `who` and returns its id (parsed from `Location`).
pub async fn create_course(app: &Router, who: (&str, &str), title: &str) -> i64 {
    let reply = send(
        app,
        "POST",
        "/api/courses",
        Some(&basic(who.0, who.1)),
        Some(json!({
            "title": title,
            "description": "Course description",
            "estimatedTime": "2 weeks",
            "materialsNeeded": "none",
        })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED, "{:?}", reply.body);
    reply
        .location()
        .and_then(|l| l.strip_prefix("/api/courses/"))
        .and_then(|id| id.parse().ok())
        .expect("Location header with course id")
}
