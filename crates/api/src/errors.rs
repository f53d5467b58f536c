use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use holocron_domain::DomainError;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // The error interceptor layer sanitizes non-operational messages
        // in production and attaches the debug block in development.
        (
            status,
            Json(json!({
                "success": false,
                "error": self.0.code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}
