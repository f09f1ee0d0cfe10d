//! HTTP-level integration tests for the `/cars` resource.
//!
//! Uses tower's `ServiceExt::oneshot` to send requests straight to the
//! router, backed by the in-memory store.

mod common;

use axum::http::StatusCode;
use common::{body_json, civic, delete, get, post_json, put_json};

async fn create_civic(app: &axum::Router) -> String {
    let response = post_json(app.clone(), "/cars", civic()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_every_field_and_an_id() {
    let app = common::memory_app();
    let response = post_json(app, "/cars", civic()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_string());
    assert_eq!(json["model"], "Civic");
    assert_eq!(json["image"], "http://x/civic.jpg");
    assert_eq!(json["price"], 22000);
    assert_eq!(json["company"], "Honda");
    assert_eq!(json["features"], "ABS, AC");
    assert_eq!(json["moreDetails"], "2024 model");
}

#[tokio::test]
async fn created_body_echoes_submitted_fields_exactly() {
    let app = common::memory_app();
    let submitted = civic();
    let mut created = body_json(post_json(app, "/cars", submitted.clone()).await).await;

    created.as_object_mut().unwrap().remove("id");
    assert_eq!(created, submitted);
}

#[tokio::test]
async fn create_assigns_fresh_ids() {
    let app = common::memory_app();
    let first = create_civic(&app).await;
    let second = create_civic(&app).await;
    assert_ne!(first, second);
}

#[tokio::test]
async fn create_missing_field_returns_400_and_writes_nothing() {
    let app = common::memory_app();
    let mut body = civic();
    body.as_object_mut().unwrap().remove("company");

    let response = post_json(app.clone(), "/cars", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("company"));

    let list = body_json(get(app, "/cars").await).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_with_empty_text_returns_400() {
    let app = common::memory_app();
    let mut body = civic();
    body["model"] = serde_json::json!("");

    let response = post_json(app, "/cars", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_non_numeric_price_returns_400() {
    let app = common::memory_app();
    let mut body = civic();
    body["price"] = serde_json::json!("expensive");

    let response = post_json(app, "/cars", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_accepts_zero_and_negative_price() {
    let app = common::memory_app();
    for price in [0, -500] {
        let mut body = civic();
        body["price"] = serde_json::json!(price);
        let response = post_json(app.clone(), "/cars", body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_returns_last_written_state() {
    let app = common::memory_app();
    let id = create_civic(&app).await;

    put_json(
        app.clone(),
        &format!("/cars/{id}"),
        serde_json::json!({"features": "ABS, AC, Sunroof"}),
    )
    .await;

    let response = get(app, &format!("/cars/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id.as_str());
    assert_eq!(json["features"], "ABS, AC, Sunroof");
}

#[tokio::test]
async fn list_returns_records_oldest_first() {
    let app = common::memory_app();
    let first = create_civic(&app).await;
    let second = create_civic(&app).await;

    let response = get(app, "/cars").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let ids: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[tokio::test]
async fn reads_do_not_require_a_token() {
    let app = common::memory_app();
    let id = create_civic(&app).await;

    assert_eq!(get(app.clone(), "/cars").await.status(), StatusCode::OK);
    assert_eq!(
        get(app, &format!("/cars/{id}")).await.status(),
        StatusCode::OK
    );
}

// ---------------------------------------------------------------------------
// Unknown ids
// ---------------------------------------------------------------------------

#[tokio::test]
async fn never_issued_id_returns_404_everywhere() {
    let app = common::memory_app();
    let id = "6f1c1f0e-3c55-4d55-9d0f-2f3b1fd0c9aa";
    let uri = format!("/cars/{id}");

    assert_eq!(get(app.clone(), &uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        put_json(app.clone(), &uri, serde_json::json!({"price": 1}))
            .await
            .status(),
        StatusCode::NOT_FOUND
    );
    let response = delete(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_id_returns_404() {
    let app = common::memory_app();
    let response = get(app, "/cars/not-a-real-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_with_current_values_leaves_record_unchanged() {
    let app = common::memory_app();
    let id = create_civic(&app).await;
    let uri = format!("/cars/{id}");
    let before = body_json(get(app.clone(), &uri).await).await;

    let response = put_json(app.clone(), &uri, civic()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, before);

    let after = body_json(get(app, &uri).await).await;
    assert_eq!(after, before);
}

#[tokio::test]
async fn update_with_empty_body_is_a_no_op() {
    let app = common::memory_app();
    let id = create_civic(&app).await;
    let uri = format!("/cars/{id}");
    let before = body_json(get(app.clone(), &uri).await).await;

    let response = put_json(app, &uri, serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, before);
}

#[tokio::test]
async fn update_cannot_empty_a_required_field() {
    let app = common::memory_app();
    let id = create_civic(&app).await;

    let response = put_json(
        app,
        &format!("/cars/{id}"),
        serde_json::json!({"model": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn whitespace_text_is_accepted_verbatim() {
    let app = common::memory_app();
    let mut body = civic();
    body["features"] = serde_json::json!(" ");

    let response = post_json(app.clone(), "/cars", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["features"], " ");

    let id = created["id"].as_str().unwrap();
    let response = put_json(app, &format!("/cars/{id}"), serde_json::json!({"model": "  "})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["model"], "  ");
}

#[tokio::test]
async fn update_ignores_id_in_body() {
    let app = common::memory_app();
    let id = create_civic(&app).await;

    let response = put_json(
        app,
        &format!("/cars/{id}"),
        serde_json::json!({"id": "00000000-0000-0000-0000-000000000000", "company": "Acura"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id.as_str());
    assert_eq!(json["company"], "Acura");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_is_not_idempotent() {
    let app = common::memory_app();
    let id = create_civic(&app).await;
    let uri = format!("/cars/{id}");

    let response = delete(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Vehicle deleted");

    assert_eq!(delete(app, &uri).await.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn civic_lifecycle() {
    let app = common::memory_app();

    let created = post_json(app.clone(), "/cars", civic()).await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(created).await;
    let id = created["id"].as_str().unwrap().to_string();
    let uri = format!("/cars/{id}");

    let list = body_json(get(app.clone(), "/cars").await).await;
    assert!(list.as_array().unwrap().contains(&created));

    let updated = put_json(app.clone(), &uri, serde_json::json!({"price": 21000})).await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = body_json(updated).await;
    assert_eq!(updated["price"].as_f64(), Some(21000.0));
    for field in ["id", "model", "image", "company", "features", "moreDetails"] {
        assert_eq!(updated[field], created[field], "{field} must be unchanged");
    }

    assert_eq!(delete(app.clone(), &uri).await.status(), StatusCode::OK);
    assert_eq!(get(app, &uri).await.status(), StatusCode::NOT_FOUND);
}
