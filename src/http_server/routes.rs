//! # API Routes
//!
//! Axum handlers for the record collection. The handlers are generic
//! over the store profile; the search route only exists for the
//! product variant and is wired separately.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::store::{Product, ProductProfile, Profile, RecordStore};

use super::errors::{ApiError, ErrorResponse};

/// Shared state type
type StoreState<P> = Arc<RecordStore<P>>;

/// CRUD and stats routes for one record variant, rooted at `/api`.
pub fn record_routes<P: Profile>(store: Arc<RecordStore<P>>) -> Router {
    let collection = format!("/api/{}", P::COLLECTION);
    let item = format!("/api/{}/{{id}}", P::COLLECTION);

    Router::new()
        .route(
            &collection,
            get(list_handler::<P>).post(create_handler::<P>),
        )
        .route(
            &item,
            get(get_handler::<P>)
                .patch(update_handler::<P>)
                .delete(delete_handler::<P>),
        )
        .route("/api/stats", get(stats_handler::<P>))
        .with_state(store)
}

/// Substring search route, product variant only.
pub fn search_routes(store: Arc<RecordStore<ProductProfile>>) -> Router {
    Router::new()
        .route("/api/products/search/{query}", get(search_handler))
        .with_state(store)
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// List all records
async fn list_handler<P: Profile>(
    State(store): State<StoreState<P>>,
) -> Result<Json<Vec<P::Record>>, ApiError> {
    Ok(Json(store.list()?))
}

/// Get a record by id
async fn get_handler<P: Profile>(
    State(store): State<StoreState<P>>,
    Path(id): Path<String>,
) -> Result<Json<P::Record>, ApiError> {
    Ok(Json(store.get(&id)?))
}

/// Create a record
async fn create_handler<P: Profile>(
    State(store): State<StoreState<P>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<P::Record>), ApiError> {
    let record = store.create(&body)?;
    info!(entity = P::NAME, id = P::id(&record), "record created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Partially update a record
async fn update_handler<P: Profile>(
    State(store): State<StoreState<P>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<P::Record>, ApiError> {
    let record = store.update(&id, &body)?;
    info!(entity = P::NAME, id = %id, "record updated");
    Ok(Json(record))
}

/// Delete a record
async fn delete_handler<P: Profile>(
    State(store): State<StoreState<P>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.delete(&id)?;
    info!(entity = P::NAME, id = %id, "record deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Derived statistics
async fn stats_handler<P: Profile>(
    State(store): State<StoreState<P>>,
) -> Result<Json<P::Stats>, ApiError> {
    Ok(Json(store.stats()?))
}

/// Case-insensitive substring search over name, category and
/// description. No match is an empty array, not an error.
async fn search_handler(
    State(store): State<StoreState<ProductProfile>>,
    Path(query): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(store.search(&query)?))
}

/// Health check handler
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fallback for unmatched routes
pub async fn fallback_handler() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("route not found")),
    )
}
