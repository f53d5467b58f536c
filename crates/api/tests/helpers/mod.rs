mod mock_fetch;

pub use mock_fetch::MockFetchClient;

use axum::Router;
use holocron_api::{create_api_routes, AppState};
use holocron_application::ports::{CacheStore, FetchClient};
use holocron_application::services::StatisticsTracker;
use holocron_application::use_cases::{
    ClearCacheUseCase, GetCacheStatsUseCase, GetCharacterUseCase, GetFilmUseCase,
    ListCharactersUseCase, ListFilmsUseCase,
};
use holocron_infrastructure::TtlCache;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct TestApp {
    pub router: Router,
    pub cache: Arc<TtlCache>,
    pub statistics: Arc<StatisticsTracker>,
}

pub fn build_app(fetch: Arc<dyn FetchClient>, expose_debug: bool) -> TestApp {
    let cache = Arc::new(TtlCache::new());
    let cache_store: Arc<dyn CacheStore> = cache.clone();
    let statistics = Arc::new(StatisticsTracker::new(Duration::from_secs(300)));

    let state = AppState {
        list_characters: Arc::new(ListCharactersUseCase::new(fetch.clone())),
        get_character: Arc::new(GetCharacterUseCase::new(fetch.clone())),
        list_films: Arc::new(ListFilmsUseCase::new(fetch.clone())),
        get_film: Arc::new(GetFilmUseCase::new(fetch)),
        cache_stats: Arc::new(GetCacheStatsUseCase::new(cache_store.clone())),
        clear_cache: Arc::new(ClearCacheUseCase::new(cache_store)),
        statistics: statistics.clone(),
        started_at: Instant::now(),
        expose_debug,
    };

    TestApp {
        router: create_api_routes(state),
        cache,
        statistics,
    }
}
