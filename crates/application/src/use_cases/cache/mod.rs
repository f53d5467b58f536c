mod clear_cache;
mod get_stats;

pub use clear_cache::ClearCacheUseCase;
pub use get_stats::GetCacheStatsUseCase;
