mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{JOE, SALLY, app, basic, create_course, seeded_app, send};

#[tokio::test]
async fn create_returns_location_and_echoes_body() {
    let app = seeded_app().await;
    let body = json!({
        "title": "X",
        "description": "Y",
        "estimatedTime": "2 weeks",
        "materialsNeeded": "none"
    });

    let reply = send(
        &app,
        "POST",
        "/api/courses",
        Some(&basic(JOE.0, JOE.1)),
        Some(body.clone()),
    )
    .await;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.location(), Some("/api/courses/1"));
    assert_eq!(reply.body, body);
}

#[tokio::test]
async fn create_requires_auth() {
    let app = seeded_app().await;
    let reply = send(
        &app,
        "POST",
        "/api/courses",
        None,
        Some(json!({ "title": "X", "description": "Y" })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);

    let list = send(&app, "GET", "/api/courses", None, None).await;
    assert_eq!(list.body, json!([]));
}

#[tokio::test]
async fn create_validation_errors() {
    let app = seeded_app().await;
    let reply = send(
        &app,
        "POST",
        "/api/courses",
        Some(&basic(JOE.0, JOE.1)),
        Some(json!({ "title": "" })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        reply.body,
        json!({ "validationErrors": ["Please provide a title", "A description is required"] })
    );
}

#[tokio::test]
async fn create_owned_by_authenticated_user() {
    let app = seeded_app().await;
    let id = create_course(&app, JOE, "Joe's course").await;

    let reply = send(&app, "GET", &format!("/api/courses/{id}"), None, None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["User"]["emailAddress"], JOE.0);
}

#[tokio::test]
async fn create_for_someone_else_is_refused() {
    let app = seeded_app().await;

    // Joe is user 1, Sally user 2
    let reply = send(
        &app,
        "POST",
        "/api/courses",
        Some(&basic(JOE.0, JOE.1)),
        Some(json!({ "title": "X", "description": "Y", "userId": 2 })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::FORBIDDEN);

    let list = send(&app, "GET", "/api/courses", None, None).await;
    assert_eq!(list.body, json!([]));

    let own = send(
        &app,
        "POST",
        "/api/courses",
        Some(&basic(JOE.0, JOE.1)),
        Some(json!({ "title": "X", "description": "Y", "userId": 1 })),
    )
    .await;
    assert_eq!(own.status, StatusCode::CREATED);
}

#[tokio::test]
async fn list_includes_owner_summary() {
    let app = seeded_app().await;
    create_course(&app, JOE, "First").await;
    create_course(&app, SALLY, "Second").await;

    let reply = send(&app, "GET", "/api/courses", None, None).await;
    assert_eq!(reply.status, StatusCode::OK);

    let courses = reply.body.as_array().unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0]["title"], "First");
    assert_eq!(
        courses[0]["User"],
        json!({ "firstName": "Joe", "lastName": "Smith", "emailAddress": JOE.0 })
    );
    assert_eq!(courses[1]["User"]["firstName"], "Sally");
    assert!(courses[0]["User"].get("password").is_none());
}

#[tokio::test]
async fn unknown_course_is_404() {
    let app = seeded_app().await;
    let reply = send(&app, "GET", "/api/courses/999", None, None).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let app = seeded_app().await;
    let reply = send(&app, "GET", "/api/courses/abc", None, None).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn owner_update_persists_fields() {
    let app = seeded_app().await;
    let id = create_course(&app, JOE, "Old title").await;
    let uri = format!("/api/courses/{id}");

    let reply = send(
        &app,
        "PUT",
        &uri,
        Some(&basic(JOE.0, JOE.1)),
        Some(json!({ "title": "New title", "materialsNeeded": null })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::NO_CONTENT);
    assert!(reply.body.is_null());

    let course = send(&app, "GET", &uri, None, None).await.body;
    assert_eq!(course["title"], "New title");
    assert_eq!(course["description"], "Course description");
    assert_eq!(course["estimatedTime"], "2 weeks");
    assert!(course["materialsNeeded"].is_null());
}

#[tokio::test]
async fn non_owner_update_is_403_and_changes_nothing() {
    let app = seeded_app().await;
    let id = create_course(&app, JOE, "Joe's course").await;
    let uri = format!("/api/courses/{id}");

    let reply = send(
        &app,
        "PUT",
        &uri,
        Some(&basic(SALLY.0, SALLY.1)),
        Some(json!({ "title": "Hijacked" })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::FORBIDDEN);
    assert!(reply.body.is_null());

    let course = send(&app, "GET", &uri, None, None).await.body;
    assert_eq!(course["title"], "Joe's course");
}

#[tokio::test]
async fn update_validation_errors() {
    let app = seeded_app().await;
    let id = create_course(&app, JOE, "Title").await;

    let reply = send(
        &app,
        "PUT",
        &format!("/api/courses/{id}"),
        Some(&basic(JOE.0, JOE.1)),
        Some(json!({ "title": "", "description": null })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        reply.body["validationErrors"],
        json!(["Please provide a title", "A description is required"])
    );
}

#[tokio::test]
async fn update_cannot_transfer_ownership() {
    let app = seeded_app().await;
    let id = create_course(&app, JOE, "Title").await;
    let uri = format!("/api/courses/{id}");

    let reply = send(
        &app,
        "PUT",
        &uri,
        Some(&basic(JOE.0, JOE.1)),
        Some(json!({ "userId": 2 })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::NO_CONTENT);

    let course = send(&app, "GET", &uri, None, None).await.body;
    assert_eq!(course["userId"], 1);
}

#[tokio::test]
async fn update_unknown_course_is_404() {
    let app = seeded_app().await;
    let reply = send(
        &app,
        "PUT",
        "/api/courses/999",
        Some(&basic(JOE.0, JOE.1)),
        Some(json!({ "title": "X" })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_course_is_404() {
    let app = seeded_app().await;
    let reply = send(
        &app,
        "DELETE",
        "/api/courses/999",
        Some(&basic(JOE.0, JOE.1)),
        None,
    )
    .await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unsupported_method_is_405_without_auth() {
    let app = seeded_app().await;
    for uri in ["/api/courses", "/api/courses/1"] {
        let reply = send(&app, "PATCH", uri, None, Some(json!({}))).await;
        assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED, "{uri}");
    }
}

#[tokio::test]
async fn mutations_check_auth_before_anything_else() {
    let app = seeded_app().await;
    let reply = send(&app, "PUT", "/api/courses/999", None, Some(json!({}))).await;
    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
    let reply = send(&app, "DELETE", "/api/courses/999", None, None).await;
    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn owner_delete_then_lookup_is_404() {
    let app = seeded_app().await;
    let id = create_course(&app, JOE, "Doomed").await;
    let uri = format!("/api/courses/{id}");

    let reply = send(&app, "DELETE", &uri, Some(&basic(JOE.0, JOE.1)), None).await;
    assert_eq!(reply.status, StatusCode::NO_CONTENT);

    let after = send(&app, "GET", &uri, None, None).await;
    assert_eq!(after.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_owner_delete_is_403_and_course_survives() {
    let app = seeded_app().await;
    let id = create_course(&app, JOE, "Keep me").await;
    let uri = format!("/api/courses/{id}");

    let reply = send(&app, "DELETE", &uri, Some(&basic(SALLY.0, SALLY.1)), None).await;
    assert_eq!(reply.status, StatusCode::FORBIDDEN);

    let after = send(&app, "GET", &uri, None, None).await;
    assert_eq!(after.status, StatusCode::OK);
    assert_eq!(after.body["title"], "Keep me");
}

#[tokio::test]
async fn health_and_unknown_routes() {
    let app = app();
    let health = send(&app, "GET", "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body, json!({ "status": "ok" }));
    assert!(health.headers.contains_key("x-request-id"));
    assert_eq!(health.headers["x-content-type-options"], "nosniff");

    let missing = send(&app, "GET", "/api/nope", None, None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
