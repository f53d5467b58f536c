use crate::dto::{ApiResponse, HealthData};
use crate::handlers::success;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use chrono::Utc;

pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthData>> {
    success(HealthData {
        timestamp: Utc::now().to_rfc3339(),
        uptime: state.started_at.elapsed().as_secs(),
        cache_stats: state.cache_stats.execute(),
    })
}
