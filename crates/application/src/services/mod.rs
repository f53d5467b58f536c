mod statistics;

pub use statistics::StatisticsTracker;
