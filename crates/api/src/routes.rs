use crate::handlers;
use crate::middleware::{error_interceptor, request_tracker};
use crate::state::AppState;
use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get},
    Router,
};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/people", get(handlers::people::list_characters))
        .route("/people/{id}", get(handlers::people::get_character))
        .route("/movies", get(handlers::films::list_films))
        .route("/movies/{id}", get(handlers::films::get_film))
        .route("/statistics", get(handlers::statistics::request_statistics))
        .route("/cache/stats", get(handlers::cache::cache_stats))
        .route("/cache/clear", delete(handlers::cache::clear_cache))
        .route("/demo/error/{kind}", get(handlers::demo::trigger_error))
        .fallback(handlers::not_found)
        // Tracker runs outside the interceptor so every request, even one
        // that ends in an error envelope, is counted.
        .layer(from_fn_with_state(
            state.clone(),
            error_interceptor::intercept_errors,
        ))
        .layer(from_fn_with_state(
            state.clone(),
            request_tracker::track_requests,
        ))
        .with_state(state)
}
