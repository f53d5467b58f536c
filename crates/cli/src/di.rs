use holocron_api::AppState;
use holocron_application::ports::{CacheStore, FetchClient};
use holocron_application::services::StatisticsTracker;
use holocron_application::use_cases::{
    ClearCacheUseCase, GetCacheStatsUseCase, GetCharacterUseCase, GetFilmUseCase,
    ListCharactersUseCase, ListFilmsUseCase,
};
use holocron_domain::Config;
use holocron_infrastructure::upstream::UpstreamClientConfig;
use holocron_infrastructure::{HttpFetchClient, TtlCache};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Services {
    pub state: AppState,
    pub cache: Arc<dyn CacheStore>,
    pub statistics: Arc<StatisticsTracker>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let cache: Arc<dyn CacheStore> = Arc::new(TtlCache::new());

        let client: Arc<dyn FetchClient> = Arc::new(HttpFetchClient::new(
            UpstreamClientConfig {
                base_url: config.upstream.base_url.clone(),
                timeout: Duration::from_secs(config.upstream.timeout_secs),
                default_ttl: config.upstream.default_ttl_secs.map(Duration::from_secs),
            },
            cache.clone(),
        )?);

        let statistics = Arc::new(StatisticsTracker::new(Duration::from_secs(
            config.statistics.recompute_interval_secs,
        )));

        let state = AppState {
            list_characters: Arc::new(ListCharactersUseCase::new(client.clone())),
            get_character: Arc::new(GetCharacterUseCase::new(client.clone())),
            list_films: Arc::new(ListFilmsUseCase::new(client.clone())),
            get_film: Arc::new(GetFilmUseCase::new(client)),
            cache_stats: Arc::new(GetCacheStatsUseCase::new(cache.clone())),
            clear_cache: Arc::new(ClearCacheUseCase::new(cache.clone())),
            statistics: statistics.clone(),
            started_at: Instant::now(),
            expose_debug: !config.is_production(),
        };

        Ok(Self {
            state,
            cache,
            statistics,
        })
    }
}
