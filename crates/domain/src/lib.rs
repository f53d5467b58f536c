//! Holocron Domain Layer
pub mod character;
pub mod config;
pub mod errors;
pub mod film;
pub mod statistics;

pub use character::{CharacterDetail, CharacterSummary};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use film::{FilmDetail, FilmSummary};
pub use statistics::{RequestStat, StatisticsSnapshot};
