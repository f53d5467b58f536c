use crate::dto::{ApiResponse, ClearQuery};
use crate::handlers::success;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use holocron_application::ports::CacheStatsSnapshot;

pub async fn cache_stats(State(state): State<AppState>) -> Json<ApiResponse<CacheStatsSnapshot>> {
    success(state.cache_stats.execute())
}

pub async fn clear_cache(
    State(state): State<AppState>,
    Query(query): Query<ClearQuery>,
) -> Json<ApiResponse<()>> {
    let pattern = query.pattern.as_deref();
    state.clear_cache.execute(pattern);
    let message = match pattern {
        Some(pattern) => format!("Cache cleared for pattern: {pattern}"),
        None => "All cache cleared".to_string(),
    };
    Json(ApiResponse::message(message))
}
