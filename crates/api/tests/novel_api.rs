//! HTTP-level tests for the `/novels` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, create, delete, get, put_json};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_update_list_scenario(pool: SqlitePool) {
    let novel = create(&pool, "/novels", serde_json::json!({ "userID": 1, "title": "T" })).await;
    let id = novel["novelID"].as_i64().expect("novelID should be a number");
    assert_eq!(novel["userID"], 1);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/novels/{id}"), serde_json::json!({ "genre": "G" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title"], "T");
    assert_eq!(updated["genre"], "G");

    let app = common::build_test_app(pool);
    let response = get(app, "/novels/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let novels = body_json(response).await;
    let novels = novels.as_array().unwrap();
    assert_eq!(novels.len(), 1);
    assert_eq!(novels[0]["novelID"], id);
    assert_eq!(novels[0]["genre"], "G");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_preserves_omitted_fields(pool: SqlitePool) {
    let novel = create(
        &pool,
        "/novels",
        serde_json::json!({ "userID": 2, "title": "Draft", "genre": "Noir", "summary": "A detective" }),
    )
    .await;
    let id = novel["novelID"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    put_json(app, &format!("/novels/{id}"), serde_json::json!({ "title": "Final" })).await;

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/novels/novel/{id}")).await).await;
    assert_eq!(fetched["title"], "Final");
    assert_eq!(fetched["genre"], "Noir");
    assert_eq!(fetched["summary"], "A detective");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_without_title_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(app, "/novels", serde_json::json!({ "userID": 1 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let novels = body_json(get(app, "/novels/1").await).await;
    assert!(novels.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_by_owner_and_title(pool: SqlitePool) {
    create(&pool, "/novels", serde_json::json!({ "userID": 3, "title": "Night Train" })).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/novel/3/Night%20Train").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Night Train");

    let app = common::build_test_app(pool);
    let response = get(app, "/novel/4/Night%20Train").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_get_delete_get(pool: SqlitePool) {
    let novel = create(&pool, "/novels", serde_json::json!({ "userID": 1, "title": "Gone" })).await;
    let id = novel["novelID"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    assert_eq!(get(app, &format!("/novels/novel/{id}")).await.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete(app, &format!("/novels/{id}")).await.status(),
        StatusCode::NO_CONTENT
    );

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        get(app, &format!("/novels/novel/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );

    // A second delete has nothing to remove.
    let app = common::build_test_app(pool);
    assert_eq!(
        delete(app, &format!("/novels/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_novel_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/novels/999999", serde_json::json!({ "genre": "G" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_user_without_novels_is_empty(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/novels/77").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_id_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/novels/novel/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_from_form_body(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = common::post_form(app, "/novels", "userID=3&title=Dune&genre=SF").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let novel = body_json(response).await;
    assert_eq!(novel["userID"], 3);
    assert_eq!(novel["title"], "Dune");

    let app = common::build_test_app(pool);
    let listed = body_json(get(app, "/novels/3").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}
