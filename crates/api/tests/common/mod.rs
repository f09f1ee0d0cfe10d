#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use motorhub_api::auth::jwt::{generate_access_token, JwtConfig};
use motorhub_api::config::{LogFormat, ServerConfig, StoreBackend};
use motorhub_api::router::build_app_router;
use motorhub_api::state::AppState;
use motorhub_db::store::CatalogStore;

/// Build a test `ServerConfig` with safe defaults and a short store deadline.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_timeout_ms: 200,
        store_backend: StoreBackend::Memory,
        database_url: None,
        db_max_connections: 1,
        log_format: LogFormat::Text,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router over the given store.
///
/// Clones of the returned router share the store, so a sequence of
/// `oneshot` calls observes earlier writes.
pub fn build_test_app(store: CatalogStore) -> Router {
    build_app_router(AppState::new(store, test_config()))
}

/// Router over a fresh in-memory store.
pub fn memory_app() -> Router {
    build_test_app(CatalogStore::in_memory())
}

/// A valid bearer token for the test JWT secret.
pub fn token() -> String {
    generate_access_token("test-operator", &test_config().jwt).unwrap()
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

/// Authenticated POST with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body), Some(&token())).await
}

/// Authenticated PUT with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body), Some(&token())).await
}

/// Authenticated DELETE.
pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, Some(&token())).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn civic() -> serde_json::Value {
    serde_json::json!({
        "model": "Civic",
        "image": "http://x/civic.jpg",
        "price": 22000,
        "company": "Honda",
        "features": "ABS, AC",
        "moreDetails": "2024 model"
    })
}

pub fn brake_pad() -> serde_json::Value {
    serde_json::json!({
        "partNumber": "BRK-221",
        "image": "http://x/pad.jpg",
        "details": "Front ceramic brake pad"
    })
}
