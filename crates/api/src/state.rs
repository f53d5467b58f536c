use holocron_application::services::StatisticsTracker;
use holocron_application::use_cases::{
    ClearCacheUseCase, GetCacheStatsUseCase, GetCharacterUseCase, GetFilmUseCase,
    ListCharactersUseCase, ListFilmsUseCase,
};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub list_characters: Arc<ListCharactersUseCase>,
    pub get_character: Arc<GetCharacterUseCase>,
    pub list_films: Arc<ListFilmsUseCase>,
    pub get_film: Arc<GetFilmUseCase>,
    pub cache_stats: Arc<GetCacheStatsUseCase>,
    pub clear_cache: Arc<ClearCacheUseCase>,
    pub statistics: Arc<StatisticsTracker>,
    pub started_at: Instant,
    /// Development mode: error envelopes carry a debug block and
    /// non-operational messages are not sanitized.
    pub expose_debug: bool,
}
