use crate::state::AppState;
use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;

/// Records `METHOD /path/template` for every request so the statistics
/// tracker counts endpoints, not individual resource ids.
pub async fn track_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    state
        .statistics
        .track(&format!("{} {}", request.method(), path));

    next.run(request).await
}
