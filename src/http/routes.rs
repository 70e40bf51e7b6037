use crate::http::handlers::{delete_handler, read_handler, upsert_handler};
use crate::store::LocationStore;
use axum::Router;
use axum::http::Method;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub fn router(store: Arc<LocationStore>, endpoint: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .route(endpoint, get(read_handler).put(upsert_handler).delete(delete_handler))
        .layer(cors)
        .with_state(store)
}
