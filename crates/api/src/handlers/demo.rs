use crate::errors::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use holocron_domain::DomainError;

/// Raises one error of each class on demand so the interceptor and the
/// envelope shape can be exercised without a failing upstream.
pub async fn trigger_error(
    State(_state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let err = match kind.as_str() {
        "validation" => DomainError::Validation("This is a validation error example".into()),
        "not-found" => DomainError::NotFound("This is a not found error example".into()),
        "unauthorized" => DomainError::Unauthorized("This is an unauthorized error example".into()),
        "forbidden" => DomainError::Forbidden("This is a forbidden error example".into()),
        "conflict" => DomainError::Conflict("This is a conflict error example".into()),
        "rate-limit" => DomainError::RateLimited("This is a rate limit error example".into()),
        "server" => DomainError::Internal("This is a server error example".into()),
        other => DomainError::Validation(format!("unknown error type: {other}")),
    };
    Err::<(), _>(ApiError(err))
}
