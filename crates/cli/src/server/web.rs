use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use holocron_api::{create_api_routes, AppState};
use holocron_domain::Config;
use serde_json::json;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub async fn start_web_server(
    bind_addr: SocketAddr,
    state: AppState,
    config: &Config,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        api_url = format!("http://{}/api", bind_addr),
        "Starting web server"
    );

    let app = create_app(state, config);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(shutdown))
        .await?;

    Ok(())
}

fn create_app(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .nest("/api", create_api_routes(state))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    match config.server.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            warn!(
                origin = %config.server.cors_origin,
                "Invalid CORS origin, falling back to same-origin only"
            );
            layer
        }
    }
}

async fn index_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "holocron",
        "version": env!("CARGO_PKG_VERSION"),
        "api": "/api",
    }))
}

async fn wait_for_shutdown(shutdown: CancellationToken) {
    tokio::select! {
        _ = shutdown.cancelled() => {}
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                warn!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Shutdown signal received");
        }
    }
}
