use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use holocron_application::ports::{CacheStore, FetchClient};
use holocron_domain::DomainError;
use holocron_infrastructure::upstream::UpstreamClientConfig;
use holocron_infrastructure::{HttpFetchClient, TtlCache};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn make_client(base_url: String, cache: Arc<TtlCache>) -> HttpFetchClient {
    HttpFetchClient::new(
        UpstreamClientConfig {
            base_url,
            timeout: Duration::from_secs(2),
            default_ttl: Some(Duration::from_secs(300)),
        },
        cache as Arc<dyn CacheStore>,
    )
    .unwrap()
}

#[tokio::test]
async fn test_get_json_returns_upstream_body() {
    let base = spawn_stub(Router::new().route(
        "/people/1",
        get(|| async { Json(json!({"result": {"uid": "1"}})) }),
    ))
    .await;

    let client = make_client(base, Arc::new(TtlCache::new()));
    let body = client.get_json("/people/1", None, None).await.unwrap();

    assert_eq!(body["result"]["uid"], "1");
}

#[tokio::test]
async fn test_cached_response_skips_network() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route(
            "/people/1",
            get(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(json!({"result": {"uid": "1"}}))
            }),
        )
        .with_state(hits.clone());
    let base = spawn_stub(router).await;

    let client = make_client(base, Arc::new(TtlCache::new()));

    let first = client
        .get_json("/people/1", Some("people:1"), None)
        .await
        .unwrap();
    let second = client
        .get_json("/people/1", Some("people:1"), None)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_no_cache_key_always_fetches() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route(
            "/films",
            get(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(json!({"results": []}))
            }),
        )
        .with_state(hits.clone());
    let base = spawn_stub(router).await;

    let client = make_client(base, Arc::new(TtlCache::new()));
    client.get_json("/films", None, None).await.unwrap();
    client.get_json("/films", None, None).await.unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_upstream_404_maps_to_not_found() {
    let base = spawn_stub(Router::new().route(
        "/people/999",
        get(|| async { (StatusCode::NOT_FOUND, "not found") }),
    ))
    .await;

    let client = make_client(base, Arc::new(TtlCache::new()));
    let err = client.get_json("/people/999", None, None).await.unwrap_err();

    assert!(matches!(err, DomainError::NotFound(_)));
    assert_eq!(err.status(), 404);
}

#[tokio::test]
async fn test_upstream_429_maps_to_rate_limited() {
    let base = spawn_stub(Router::new().route(
        "/people",
        get(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    ))
    .await;

    let client = make_client(base, Arc::new(TtlCache::new()));
    let err = client.get_json("/people", None, None).await.unwrap_err();

    assert_eq!(err.code(), "RATE_LIMIT_EXCEEDED");
}

#[tokio::test]
async fn test_upstream_502_keeps_status() {
    let base = spawn_stub(Router::new().route(
        "/films/1",
        get(|| async { (StatusCode::BAD_GATEWAY, "bad gateway") }),
    ))
    .await;

    let client = make_client(base, Arc::new(TtlCache::new()));
    let err = client.get_json("/films/1", None, None).await.unwrap_err();

    assert!(matches!(err, DomainError::Upstream { status: 502, .. }));
    assert_eq!(err.status(), 502);
}

#[tokio::test]
async fn test_connection_refused_maps_to_unreachable() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = make_client(format!("http://{addr}"), Arc::new(TtlCache::new()));
    let err = client.get_json("/people", None, None).await.unwrap_err();

    assert!(matches!(err, DomainError::Unreachable(_)));
    assert_eq!(err.status(), 503);
}

#[tokio::test]
async fn test_timeout_maps_to_gateway_timeout() {
    let base = spawn_stub(Router::new().route(
        "/slow",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    ))
    .await;

    let client = HttpFetchClient::new(
        UpstreamClientConfig {
            base_url: base,
            timeout: Duration::from_millis(100),
            default_ttl: None,
        },
        Arc::new(TtlCache::new()) as Arc<dyn CacheStore>,
    )
    .unwrap();

    let err = client.get_json("/slow", None, None).await.unwrap_err();

    assert!(matches!(err, DomainError::Timeout(_)));
    assert_eq!(err.status(), 504);
}

#[tokio::test]
async fn test_absolute_url_bypasses_base() {
    let base = spawn_stub(Router::new().route(
        "/people/2",
        get(|| async { Json(json!({"result": {"uid": "2"}})) }),
    ))
    .await;

    // Base URL points nowhere; the absolute URL must be used as-is.
    let client = make_client("http://127.0.0.1:9".to_string(), Arc::new(TtlCache::new()));
    let url = format!("{base}/people/2");
    let body: Value = client.get_json(&url, Some(&url), None).await.unwrap();

    assert_eq!(body["result"]["uid"], "2");
}

#[tokio::test]
async fn test_explicit_ttl_overrides_default() {
    let cache = Arc::new(TtlCache::new());
    let base = spawn_stub(Router::new().route(
        "/people/1",
        get(|| async { Json(json!({"result": {"uid": "1"}})) }),
    ))
    .await;

    let client = make_client(base, cache.clone());
    client
        .get_json("/people/1", Some("people:1"), Some(Duration::from_millis(20)))
        .await
        .unwrap();

    assert!(cache.has("people:1"));
    tokio::time::sleep(Duration::from_millis(40)).await;
    assert!(!cache.has("people:1"));
}
