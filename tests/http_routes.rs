//! HTTP route tests
//!
//! Drives the axum router directly with tower's `oneshot` and checks
//! the transport contract: status codes, JSON bodies, the error shape
//! and the unmatched-route fallback.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use recstore::http_server::routes::{fallback_handler, record_routes, search_routes};
use recstore::http_server::{HttpServer, ServerConfig, StoreVariant};
use recstore::store::{ProductProfile, RecordStore, SequentialId, UserProfile};
use serde_json::{json, Value};
use tower::ServiceExt;

fn user_app() -> Router {
    let store: Arc<RecordStore<UserProfile>> =
        Arc::new(RecordStore::new(Box::new(SequentialId::new())));
    record_routes(store).fallback(fallback_handler)
}

fn product_app() -> Router {
    let store: Arc<RecordStore<ProductProfile>> =
        Arc::new(RecordStore::new(Box::new(SequentialId::new())));
    record_routes(store.clone())
        .merge(search_routes(store))
        .fallback(fallback_handler)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn product_body(name: &str) -> Value {
    json!({
        "name": name,
        "category": "Electronics",
        "description": "A thing",
        "price": 100,
        "stock": 5
    })
}

#[tokio::test]
async fn test_user_crud_lifecycle() {
    let app = user_app();

    // Create
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"name": "Ann", "age": 30})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["name"], "Ann");
    assert_eq!(created["age"].as_f64().unwrap(), 30.0);

    // Patch one field
    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/api/users/{}", id),
        Some(json!({"age": 31})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Ann");
    assert_eq!(updated["age"].as_f64().unwrap(), 31.0);

    // Delete: 204, empty body
    let (status, body) = send(&app, Method::DELETE, &format!("/api/users/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    // Gone
    let (status, body) = send(&app, Method::GET, &format!("/api/users/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_product_missing_stock_is_400_and_store_unchanged() {
    let app = product_app();

    let mut body = product_body("Widget");
    body.as_object_mut().unwrap().remove("stock");

    let (status, error) = send(&app, Method::POST, "/api/products", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].is_string());

    let (status, list) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_update_without_fields_is_400() {
    let app = user_app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"name": "Ann", "age": 30})),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, error) = send(
        &app,
        Method::PATCH,
        &format!("/api/users/{}", id),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "nothing to update");
}

#[tokio::test]
async fn test_second_delete_is_404() {
    let app = product_app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(product_body("Widget")),
    )
    .await;
    let uri = format!("/api/products/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, error) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(error["error"].is_string());
}

#[tokio::test]
async fn test_search_matches_and_misses() {
    let app = product_app();
    send(
        &app,
        Method::POST,
        "/api/products",
        Some(product_body("Smartphone X")),
    )
    .await;
    let mut dock = product_body("Dock");
    dock["description"] = json!("Holds your PHONE upright");
    send(&app, Method::POST, "/api/products", Some(dock)).await;
    send(
        &app,
        Method::POST,
        "/api/products",
        Some(product_body("Toaster")),
    )
    .await;

    let (status, hits) = send(&app, Method::GET, "/api/products/search/phone", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits.as_array().unwrap().len(), 2);

    let (status, hits) = send(&app, Method::GET, "/api/products/search/submarine", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits, json!([]));
}

#[tokio::test]
async fn test_stats_on_empty_product_store_serializes_null_sentinel() {
    let app = product_app();
    let (status, stats) = send(&app, Method::GET, "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalProducts"], 0);
    assert_eq!(stats["totalStock"].as_f64().unwrap(), 0.0);
    assert_eq!(stats["categories"], json!([]));
    // NaN from the unguarded division crosses the wire as null.
    assert_eq!(stats["avgPrice"], Value::Null);
}

#[tokio::test]
async fn test_user_stats_shape() {
    let app = user_app();
    for (name, age) in [("a", 16), ("b", 18), ("c", 20), ("d", 22), ("e", 25)] {
        send(
            &app,
            Method::POST,
            "/api/users",
            Some(json!({"name": name, "age": age})),
        )
        .await;
    }
    let (status, stats) = send(&app, Method::GET, "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total"], 5);
    assert_eq!(stats["averageAge"].as_f64().unwrap(), 20.2);
}

#[tokio::test]
async fn test_unmatched_route_falls_back_to_404() {
    let app = user_app();
    let (status, body) = send(&app, Method::GET, "/api/nothing/here", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "route not found");
}

#[tokio::test]
async fn test_full_server_router_health_and_fallback() {
    let config = ServerConfig {
        variant: StoreVariant::Products,
        seed: true,
        ..Default::default()
    };
    let app = HttpServer::with_config(config).router();

    let (status, health) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");

    // Seeded deployment lists twelve products.
    let (status, list) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 12);

    let (status, body) = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "route not found");
}
