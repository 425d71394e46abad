//! HTTP-level integration tests for the `/profile` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_profile_returns_201_scalar_shape(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let student = body_json(
        post_json(
            app,
            "/student",
            serde_json::json!({"name": "Bo", "email": "bo@x.com"}),
        )
        .await,
    )
    .await;
    let student_id = student["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/profile",
        serde_json::json!({"age": 21, "bio": "Undeclared", "student_id": student_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    // The profile payload is scalar-only: age, bio, and the owning
    // student id. No id, no nested student.
    assert_eq!(
        json,
        serde_json::json!({"age": 21, "bio": "Undeclared", "student_id": student_id})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_profile_unknown_student_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/profile",
        serde_json::json!({"age": 30, "bio": "Ghost", "student_id": 999999}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Student with id 999999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_profile_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let student = body_json(
        post_json(
            app,
            "/student",
            serde_json::json!({"name": "Hal", "email": "hal@x.com"}),
        )
        .await,
    )
    .await;
    let student_id = student["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/profile",
        serde_json::json!({"age": 20, "bio": "First", "student_id": student_id}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/profile",
        serde_json::json!({"age": 21, "bio": "Second", "student_id": student_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        format!("Student {student_id} already has a profile")
    );
}

// ---------------------------------------------------------------------------
// Get / update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_profile_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let student = body_json(
        post_json(
            app,
            "/student",
            serde_json::json!({"name": "Ida", "email": "ida@x.com"}),
        )
        .await,
    )
    .await;
    let student_id = student["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/profile",
        serde_json::json!({"age": 25, "bio": "Exchange", "student_id": student_id}),
    )
    .await;

    // The first profile in a fresh database has id 1.
    let app = common::build_test_app(pool);
    let response = get(app, "/profile/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({"age": 25, "bio": "Exchange", "student_id": student_id})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_profile_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/profile/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Profile with id 999999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_profile_bio(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let student = body_json(
        post_json(
            app,
            "/student",
            serde_json::json!({"name": "Jo", "email": "jo@x.com"}),
        )
        .await,
    )
    .await;
    let student_id = student["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/profile",
        serde_json::json!({"age": 19, "bio": "Old bio", "student_id": student_id}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = put_json(app, "/profile/1", serde_json::json!({"bio": "New bio"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["bio"], "New bio");
    assert_eq!(json["age"], 19);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_rejects_student_id_change(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let student = body_json(
        post_json(
            app,
            "/student",
            serde_json::json!({"name": "Kai", "email": "kai@x.com"}),
        )
        .await,
    )
    .await;
    let student_id = student["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/profile",
        serde_json::json!({"age": 22, "bio": "Settled", "student_id": student_id}),
    )
    .await;

    // student_id is not in the update allow-list.
    let app = common::build_test_app(pool);
    let response = put_json(app, "/profile/1", serde_json::json!({"student_id": 2})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Profiles appear in student payloads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_student_detail_includes_profile(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let student = body_json(
        post_json(
            app,
            "/student",
            serde_json::json!({"name": "Lena", "email": "lena@x.com"}),
        )
        .await,
    )
    .await;
    let student_id = student["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/profile",
        serde_json::json!({"age": 23, "bio": "Senior", "student_id": student_id}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/student/{student_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["profile"],
        serde_json::json!({"age": 23, "bio": "Senior", "student_id": student_id})
    );
}
