pub mod cache;
pub mod films;
pub mod people;

mod resolve;

// Re-export use cases
pub use cache::{ClearCacheUseCase, GetCacheStatsUseCase};
pub use films::{GetFilmUseCase, ListFilmsUseCase};
pub use people::{GetCharacterUseCase, ListCharactersUseCase};
