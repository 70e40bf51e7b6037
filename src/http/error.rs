use crate::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("{0}")]
    InvalidInput(String),
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::InvalidInput(_) | ApiError::MissingFields(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::Store(StoreError::NotFound) => "Data file not found".to_string(),
            ApiError::Store(StoreError::StorageCorrupt { .. }) => "Invalid JSON in data file".to_string(),
            ApiError::Store(StoreError::Read { .. }) => "Failed to read data file".to_string(),
            ApiError::Store(StoreError::PersistFailure { .. }) => "Failed to write data to file".to_string(),
            ApiError::Store(_) => "Internal server error".to_string(),
            error => error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("❌ {}", self);
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
