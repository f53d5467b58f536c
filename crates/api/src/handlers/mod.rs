pub mod cache;
pub mod demo;
pub mod films;
pub mod health;
pub mod people;
pub mod statistics;

use crate::dto::ApiResponse;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Fallback for routes nothing else matched.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": "NOT_FOUND",
            "message": format!("The route {uri} does not exist"),
        })),
    )
}

pub(crate) fn success<T: serde::Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data))
}
