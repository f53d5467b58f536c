use crate::dto::ApiResponse;
use crate::handlers::success;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use holocron_domain::StatisticsSnapshot;

/// Returns the most recent recomputed snapshot, or `data: null` when no
/// recomputation has happened yet.
pub async fn request_statistics(
    State(state): State<AppState>,
) -> Json<ApiResponse<Option<StatisticsSnapshot>>> {
    success(state.statistics.snapshot())
}
