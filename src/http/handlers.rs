use crate::domain::Snapshot;
use crate::http::ApiError;
use crate::http::request::{parse_delete, parse_upsert};
use crate::store::LocationStore;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip_all)]
pub async fn read_handler(State(store): State<Arc<LocationStore>>) -> Result<Json<Snapshot>, ApiError> {
    let snapshot = store.read().await?;
    Ok(Json(snapshot))
}

#[instrument(skip_all)]
pub async fn upsert_handler(State(store): State<Arc<LocationStore>>, body: Bytes) -> Result<Json<Value>, ApiError> {
    let update = parse_upsert(&body)?;
    let outcome = store.upsert(update).await?;

    debug!(outcome = ?outcome, "Handled upsert");
    Ok(Json(json!({ "message": "Data processed successfully" })))
}

#[instrument(skip_all)]
pub async fn delete_handler(State(store): State<Arc<LocationStore>>, body: Bytes) -> Result<Json<Value>, ApiError> {
    let user_id = parse_delete(&body)?;
    let outcome = store.delete(&user_id).await?;

    debug!(outcome = ?outcome, "Handled delete");
    Ok(Json(json!({ "message": "User data deleted successfully" })))
}
