use crate::state::AppState;
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use tracing::error;

/// Post-processes error envelopes.
///
/// In development a `debug` block (url, method, timestamp) is appended to
/// every error response. In production, messages of unclassified internal
/// errors are replaced with a generic one so nothing leaks.
pub async fn intercept_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(_) => return (parts.status, "").into_response(),
    };

    let mut envelope: Value = match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        // Not one of our envelopes (e.g. an extractor rejection); wrap it.
        Err(_) => json!({
            "success": false,
            "error": "INTERNAL_ERROR",
            "message": String::from_utf8_lossy(&bytes),
        }),
    };

    error!(
        status = status.as_u16(),
        url = %uri,
        method = %method,
        message = envelope["message"].as_str().unwrap_or(""),
        "Error intercepted"
    );

    if state.expose_debug {
        envelope["debug"] = json!({
            "url": uri.to_string(),
            "method": method.to_string(),
            "timestamp": Utc::now().to_rfc3339(),
        });
    } else if envelope["error"] == json!("INTERNAL_ERROR") {
        envelope["message"] = json!("An unexpected error occurred");
    }

    (status, Json(envelope)).into_response()
}
