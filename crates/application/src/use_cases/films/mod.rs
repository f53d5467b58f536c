mod get_film;
mod list_films;

pub use get_film::GetFilmUseCase;
pub use list_films::ListFilmsUseCase;
