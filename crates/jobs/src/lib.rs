pub mod cache_sweep;
pub mod runner;
pub mod statistics_recompute;

pub use cache_sweep::CacheSweepJob;
pub use runner::JobRunner;
pub use statistics_recompute::StatisticsRecomputeJob;
